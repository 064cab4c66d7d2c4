//! Plain-text presentation and JSON export of results.

use serde::Serialize;
use socialseo_core::{GroundingSource, Mode, Platform, StrategyResult, TrendIdea};
use socialseo_error::{ExportError, ExportErrorKind, JsonError, SocialSeoResult};
use std::fmt;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// File name used when exporting without an explicit path.
pub const DEFAULT_EXPORT_FILE: &str = "strategy.json";

/// Text card for a strategy result.
///
/// # Examples
///
/// ```
/// # use socialseo::{StrategyCard, StrategyResult};
/// # let json = r##"{"platform":"tiktok","mode":"creator","primary_goal":"g","hook":"Wait for it",
/// #   "caption":"Hello","hashtags":["#fyp"],"recommended_post_format":"Reel",
/// #   "posting_strategy":{"recommended_posting_time_local":"7pm",
/// #   "suggested_frequency_per_week":3,"cross_posting_tips":"t"},
/// #   "sentiment_analysis":{"overall_tone":"warm","vibe_badge":"Cozy"}}"##;
/// let result: StrategyResult = serde_json::from_str(json).unwrap();
/// let card = StrategyCard(&result).to_string();
/// assert!(card.contains("TIKTOK Strategy"));
/// assert!(card.contains("Wait for it"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StrategyCard<'a>(pub &'a StrategyResult);

impl fmt::Display for StrategyCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "[{}]", result.sentiment_analysis.vibe_badge)?;
        writeln!(f, "{} Strategy", result.platform.label().to_uppercase())?;
        if let Some(title) = non_blank(result.title.as_deref()) {
            writeln!(f, "{}", title)?;
        }

        writeln!(f)?;
        writeln!(f, "The Hook")?;
        writeln!(f, "  {}", result.hook)?;

        writeln!(f)?;
        writeln!(f, "Caption")?;
        for line in result.caption.lines() {
            writeln!(f, "  {}", line)?;
        }
        if !result.hashtags.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", result.hashtags.join(" "))?;
        }

        if result.trend_detected()
            && let Some(trend) = &result.trend_metadata
        {
            writeln!(f)?;
            match non_blank(trend.trend_name.as_deref()) {
                Some(name) => writeln!(f, "Trend Detected: {}", name)?,
                None => writeln!(f, "Trend Detected")?,
            }
            if let Some(source) = non_blank(trend.trend_source.as_deref()) {
                writeln!(f, "  Source: {}", source)?;
            }
            if let Some(how) = non_blank(trend.how_to_apply_trend.as_deref()) {
                writeln!(f, "  How to apply: {}", how)?;
            }
        }

        if let Some(insights) = &result.competitor_insights {
            writeln!(f)?;
            writeln!(f, "Spy Insights")?;
            writeln!(f, "  CTA strategy: {}", insights.cta_strategy)?;
            writeln!(f, "  Visual theme: {}", insights.visual_theme)?;
            if let Some(notes) = non_blank(result.spy_mode_notes.as_deref()) {
                writeln!(f, "  Notes: {}", notes)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Format: {}", result.recommended_post_format)?;
        writeln!(f, "Tone: {}", result.sentiment_analysis.overall_tone)?;
        let posting = &result.posting_strategy;
        writeln!(
            f,
            "Post: {}, {} per week",
            posting.recommended_posting_time_local, posting.suggested_frequency_per_week
        )?;

        if let Some(guard) = &result.brand_guard {
            writeln!(f)?;
            if guard.brand_safe {
                writeln!(f, "Brand Safe Verified")?;
            } else {
                writeln!(f, "Brand Policy Issues Detected")?;
                for violation in &guard.violations_detected {
                    writeln!(f, "  - {}", violation)?;
                }
            }
            if !guard.notes.trim().is_empty() {
                writeln!(f, "  {}", guard.notes)?;
            }
        }
        Ok(())
    }
}

/// Numbered cards for trend ideas, in the order given.
#[derive(Debug, Clone, Copy)]
pub struct TrendCards<'a>(pub &'a [TrendIdea]);

impl fmt::Display for TrendCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, idea) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}. {}", index + 1, idea.idea_title)?;
            writeln!(f, "   {}", idea.idea_description)?;
            writeln!(f, "   Why it works: {}", idea.why_it_works)?;
            if !idea.suggested_platforms.is_empty() {
                writeln!(f, "   Platforms: {}", idea.suggested_platforms.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Grounding sources as a bulleted list; empty when there are none.
#[derive(Debug, Clone, Copy)]
pub struct SourceList<'a>(pub &'a [GroundingSource]);

impl fmt::Display for SourceList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        writeln!(f, "Sources:")?;
        for source in self.0 {
            match non_blank(source.title.as_deref()) {
                Some(title) => writeln!(f, "  - {} <{}>", title, source.uri)?,
                None => writeln!(f, "  - {}", source.uri)?,
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct HuntWithStrategy<'a> {
    trend_hunter_ideas: &'a [TrendIdea],
    strategy: &'a StrategyResult,
}

/// Pretty JSON printed by `hunt`.
///
/// The ideas alone are an array. When one of them was turned into a
/// strategy, both go into a single object so stdout stays one document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn hunt_json(ideas: &[TrendIdea], strategy: Option<&StrategyResult>) -> SocialSeoResult<String> {
    let json = match strategy {
        None => serde_json::to_string_pretty(ideas),
        Some(strategy) => serde_json::to_string_pretty(&HuntWithStrategy {
            trend_hunter_ideas: ideas,
            strategy,
        }),
    };
    json.map_err(|e| JsonError::new(format!("Failed to serialize ideas: {}", e)).into())
}

/// Platforms and modes with their labels.
pub fn catalog() -> String {
    let mut lines = vec!["Platforms:".to_string()];
    lines.extend(Platform::iter().map(|p| format!("  {:<12} {}", p.id(), p.label())));
    lines.push(String::new());
    lines.push("Modes:".to_string());
    lines.extend(Mode::iter().map(|m| {
        let id: &'static str = m.into();
        format!("  {:<15} {:<15} {}", id, m.label(), m.description())
    }));
    lines.join("\n")
}

/// Write `result` as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
#[instrument(skip(result), fields(path = %path.as_ref().display()))]
pub fn export_json(result: &StrategyResult, path: impl AsRef<Path>) -> SocialSeoResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| JsonError::new(format!("Failed to serialize strategy: {}", e)))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            ExportError::new(ExportErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    std::fs::write(path, json).map_err(|e| {
        ExportError::new(ExportErrorKind::FileWrite(format!("{}: {}", path.display(), e)))
    })?;

    info!("Exported strategy");
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
