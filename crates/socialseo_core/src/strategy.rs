//! The strategy record the model is asked to produce.
//!
//! Every field comes from the model. Required fields are enforced when
//! parsing; optional sections tolerate absence.

use crate::{Mode, Platform};
use serde::{Deserialize, Serialize};

/// Suggested content length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendedLength {
    /// Video duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_seconds: Option<u32>,
    /// Caption length ceiling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption_max_characters: Option<u32>,
}

/// When and how often to post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingStrategy {
    /// Local posting time, free text
    pub recommended_posting_time_local: String,
    /// Posts per week
    pub suggested_frequency_per_week: f64,
    /// Advice for reusing the post elsewhere
    pub cross_posting_tips: String,
}

/// Live trend the strategy leans on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendMetadata {
    /// Whether a trend was found
    pub trend_detected: bool,
    /// Trend name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_name: Option<String>,
    /// Where the trend was observed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_source: Option<String>,
    /// How to use it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_to_apply_trend: Option<String>,
}

/// Findings from competitor analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorInsights {
    /// Call-to-action pattern
    pub cta_strategy: String,
    /// Visual theme
    pub visual_theme: String,
}

/// Brand guideline compliance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandGuard {
    /// No violations found
    pub brand_safe: bool,
    /// Violations, if any
    #[serde(default)]
    pub violations_detected: Vec<String>,
    /// Reviewer notes
    #[serde(default)]
    pub notes: String,
}

/// Tone read of the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Overall tone
    pub overall_tone: String,
    /// Short badge, e.g. "Cozy Chaos"
    pub vibe_badge: String,
}

/// A generated content strategy for one platform and mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    /// Platform the strategy targets
    pub platform: Platform,
    /// Mode that produced it
    pub mode: Mode,
    /// Primary goal of the post
    pub primary_goal: String,
    /// Opening hook
    pub hook: String,
    /// Title, for platforms that have one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Caption body
    pub caption: String,
    /// Long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hashtags
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Format such as "Reel" or "Carousel"
    pub recommended_post_format: String,
    /// Length guidance
    #[serde(default)]
    pub recommended_length: RecommendedLength,
    /// Posting schedule
    pub posting_strategy: PostingStrategy,
    /// Trend information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_metadata: Option<TrendMetadata>,
    /// Competitor findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor_insights: Option<CompetitorInsights>,
    /// Brand compliance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_guard: Option<BrandGuard>,
    /// Tone
    pub sentiment_analysis: SentimentAnalysis,
    /// Free-form competitor notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spy_mode_notes: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl StrategyResult {
    /// Whether the model reported a live trend.
    pub fn trend_detected(&self) -> bool {
        self.trend_metadata
            .as_ref()
            .is_some_and(|meta| meta.trend_detected)
    }

    /// Text for sharing: title (or a generic heading) followed by the caption.
    ///
    /// # Examples
    ///
    /// ```
    /// # use socialseo_core::StrategyResult;
    /// # let json = r#"{"platform":"instagram","mode":"creator","primary_goal":"g","hook":"h",
    /// #   "caption":"Hello","hashtags":[],"recommended_post_format":"Reel",
    /// #   "posting_strategy":{"recommended_posting_time_local":"7pm",
    /// #   "suggested_frequency_per_week":3,"cross_posting_tips":"t"},
    /// #   "sentiment_analysis":{"overall_tone":"warm","vibe_badge":"Cozy"}}"#;
    /// let result: StrategyResult = serde_json::from_str(json).unwrap();
    /// assert_eq!(result.share_text(), "Social Strategy\n\nHello");
    /// ```
    pub fn share_text(&self) -> String {
        let heading = self.title.as_deref().unwrap_or("Social Strategy");
        format!("{}\n\n{}", heading, self.caption)
    }
}
