//! Operating modes.

use crate::platform::compact_key;
use serde::{Deserialize, Deserializer, Serialize, de};
use strum::IntoEnumIterator;

/// Wire identifiers, in declaration order.
const MODE_IDS: &[&str] = &["creator", "editor", "competitor_spy", "trend_hunter"];

/// What kind of analysis the model is asked to perform.
///
/// Serializes as its snake_case id. Deserialization goes through
/// [`Mode::parse_lenient`].
///
/// # Examples
///
/// ```
/// use socialseo_core::Mode;
///
/// assert!(Mode::Creator.requires_content());
/// assert!(!Mode::TrendHunter.requires_content());
/// assert_eq!(Mode::CompetitorSpy.to_string(), "competitor_spy");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Mode {
    /// Raw content to optimized metadata
    #[default]
    Creator,
    /// Caption and hook polishing
    Editor,
    /// Competitor screenshot analysis
    CompetitorSpy,
    /// Trend hunting by niche
    TrendHunter,
}

impl Mode {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Creator => "Creator Mode",
            Mode::Editor => "Editor Mode",
            Mode::CompetitorSpy => "Competitor Spy",
            Mode::TrendHunter => "Trend Hunter",
        }
    }

    /// One-line description for pickers.
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Creator => "Raw content to optimized metadata",
            Mode::Editor => "Polish existing captions & hooks",
            Mode::CompetitorSpy => "Analyze screenshots for secrets",
            Mode::TrendHunter => "Find viral topics & ideas",
        }
    }

    /// Whether a submission needs at least one content attachment.
    pub fn requires_content(&self) -> bool {
        !matches!(self, Mode::TrendHunter)
    }

    /// Match free-form model output to a mode.
    ///
    /// Case, spacing and punctuation are ignored, as is a trailing "mode".
    ///
    /// # Examples
    ///
    /// ```
    /// use socialseo_core::Mode;
    ///
    /// assert_eq!(Mode::parse_lenient("Creator"), Some(Mode::Creator));
    /// assert_eq!(Mode::parse_lenient("Creator Mode"), Some(Mode::Creator));
    /// assert_eq!(Mode::parse_lenient("competitor-spy"), Some(Mode::CompetitorSpy));
    /// assert_eq!(Mode::parse_lenient("viral"), None);
    /// ```
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let key = compact_key(raw);
        let key = key
            .strip_suffix("mode")
            .filter(|rest| !rest.is_empty())
            .unwrap_or(key.as_str());
        Mode::iter().find(|mode| compact_key(mode.into()) == key)
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Mode::parse_lenient(&raw).ok_or_else(|| de::Error::unknown_variant(&raw, MODE_IDS))
    }
}
