//! Instruction text sent to the model.

use chrono::{Datelike, NaiveDate};
use socialseo_core::{Mode, Platform, TargetingFilters};

/// Fixed system instruction: persona, platform tone rules, no invented
/// facts, JSON output.
pub const SYSTEM_INSTRUCTION: &str = "\
You are SocialSEO AI, the world's most advanced Social Media Algorithm Architect & Behavioral Psychologist.

1. Core Mission
Your mission is to ingest multi-modal content to generate scientifically optimized viral metadata.
You must always optimize for:
- Algorithmic relevance
- Psychological impact
- Brand consistency

2. Non-Negotiable Rules
- Zero Hallucination Standard: Never invent facts.
- Platform-Aware Output:
  - Instagram: Hooky, carousel/swipe language.
  - TikTok: Fast hook, trend-aware, save/share triggers.
  - YouTube: SEO titles, narrative hooks.
  - LinkedIn: Professional, value-driven.
  - Twitter (X): Focus on Threads. Tone: Intellectual/Contrarian.
  - Facebook: Focus on Community/Storytelling. Longer emotional narratives.
- Brand Guard Compliance: If brand guidelines are provided, strictly adhere to them.

3. Output Format
Always respond with valid JSON using the specified schema.
";

/// Appended in competitor analysis mode.
pub const COMPETITOR_DIRECTIVE: &str =
    "Identify 'Actionable Secrets' from these competitor inputs. Populate the 'competitor_insights' field.";

/// Appended when a brand-guideline file is attached.
pub const BRAND_DIRECTIVE: &str = "Adhere strictly to the attached Brand Guidelines.";

/// Text part placed right before the brand-guideline attachment.
pub const BRAND_GUIDELINES_LABEL: &str = "BRAND GUIDELINES DOCUMENT:";

/// Three-step search directive for live-trend requests.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use socialseo_core::Platform;
/// use socialseo_strategy::live_trend_directive;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let text = live_trend_directive(Platform::TikTok, "home espresso", today);
/// assert!(text.contains("Current viral trends October 2026"));
/// assert!(text.contains("Trending audio for home espresso on tiktok"));
/// ```
pub fn live_trend_directive(platform: Platform, niche: &str, today: NaiveDate) -> String {
    let month = chrono::Month::try_from(today.month() as u8)
        .map(|m| m.name())
        .unwrap_or_default();
    format!(
        "STEP 1: You have access to Google Search. Before analyzing the content, SEARCH for \
\"Current viral trends {month} {year}\" and \"Trending audio for {niche} on {platform}\".\n\
STEP 2: Use this live data to suggest a specific trending audio or challenge format that fits the user's content.\n\
STEP 3: Mention the trend name in the reasoning section.",
        year = today.year(),
    )
}

/// JSON skeleton of a strategy reply, with the requested platform and mode
/// filled in.
///
/// # Examples
///
/// ```
/// use socialseo_core::{Mode, Platform};
/// use socialseo_strategy::strategy_schema;
///
/// let schema = strategy_schema(Platform::TikTok, Mode::Editor);
/// assert!(schema.contains(r#""platform": "tiktok""#));
/// assert!(schema.contains(r#""mode": "editor""#));
/// ```
pub fn strategy_schema(platform: Platform, mode: Mode) -> String {
    format!(
        r##"Output JSON format (use exactly these keys; omit sections marked optional when they do not apply):
{{
  "platform": "{platform}",
  "mode": "{mode}",
  "primary_goal": "...",
  "hook": "...",
  "title": "... (optional)",
  "caption": "...",
  "description": "... (optional)",
  "hashtags": ["#..."],
  "recommended_post_format": "...",
  "recommended_length": {{"video_seconds": 30, "caption_max_characters": 2200}},
  "posting_strategy": {{
    "recommended_posting_time_local": "...",
    "suggested_frequency_per_week": 3,
    "cross_posting_tips": "..."
  }},
  "trend_metadata": {{"trend_detected": false, "trend_name": "...", "trend_source": "...", "how_to_apply_trend": "..."}} (optional),
  "competitor_insights": {{"cta_strategy": "...", "visual_theme": "..."}} (optional),
  "brand_guard": {{"brand_safe": true, "violations_detected": [], "notes": "..."}} (optional),
  "sentiment_analysis": {{"overall_tone": "...", "vibe_badge": "..."}},
  "spy_mode_notes": "... (optional)",
  "notes": "... (optional)"
}}"##
    )
}

/// Build the instruction text for a strategy request.
///
/// Filter values are interpolated as given, empty ones included. The reply
/// schema follows the filters.
pub fn compose_instruction(
    mode: Mode,
    platform: Platform,
    filters: &TargetingFilters,
    live_trends: bool,
    has_brand_guidelines: bool,
    today: NaiveDate,
) -> String {
    let mut text = format!(
        "Analyze the provided content for {platform} in {mode} mode.\n\
\n\
Context Filters:\n\
- Niche: {niche}\n\
- Geography: {geography}\n\
- Target Audience: {audience}\n\
- Language: {language}\n\
- Demographics: {demographics}\n",
        niche = filters.niche(),
        geography = filters.geography(),
        audience = filters.target_audience(),
        language = filters.target_language(),
        demographics = filters.target_demographics(),
    );
    text.push('\n');
    text.push_str(&strategy_schema(platform, mode));
    text.push('\n');

    if live_trends {
        text = format!(
            "{}\n\n{}",
            live_trend_directive(platform, filters.niche(), today),
            text
        );
    }

    if mode == Mode::CompetitorSpy {
        text.push('\n');
        text.push_str(COMPETITOR_DIRECTIVE);
    }

    if has_brand_guidelines {
        text.push('\n');
        text.push_str(BRAND_DIRECTIVE);
    }

    text
}

/// Instruction text for the trend-hunting path.
pub fn hunt_prompt(niche: &str) -> String {
    format!(
        r#"Search Google Trends, Twitter Trending, and TikTok Creative Center for the niche: "{niche}".
Return 5 specific viral content ideas, ranked from strongest to weakest.

Output JSON format:
{{
  "trend_hunter_ideas": [
    {{
      "idea_title": "...",
      "idea_description": "...",
      "why_it_works": "...",
      "suggested_platforms": ["instagram", "tiktok"]
    }}
  ]
}}"#
    )
}
