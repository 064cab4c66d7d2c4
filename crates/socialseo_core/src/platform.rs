//! Target social platforms.

use serde::{Deserialize, Deserializer, Serialize, de};
use strum::IntoEnumIterator;

/// Wire identifiers, in declaration order.
const PLATFORM_IDS: &[&str] = &[
    "instagram",
    "tiktok",
    "youtube",
    "linkedin",
    "twitter_x",
    "facebook",
];

/// A social platform a strategy can be generated for.
///
/// The wire identifier (`Display`, serde) is the snake_case id the model is
/// asked to echo back. `FromStr` also accepts the human labels.
/// Deserialization goes through [`Platform::parse_lenient`], since models
/// answer with labels and format names as often as with ids.
///
/// # Examples
///
/// ```
/// use socialseo_core::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(Platform::TwitterX.to_string(), "twitter_x");
/// assert_eq!(Platform::TwitterX.label(), "Twitter (X)");
/// assert_eq!(Platform::from_str("TikTok").unwrap(), Platform::TikTok);
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
#[strum(ascii_case_insensitive)]
pub enum Platform {
    /// Instagram
    #[default]
    #[serde(rename = "instagram")]
    #[strum(to_string = "instagram")]
    Instagram,
    /// TikTok
    #[serde(rename = "tiktok")]
    #[strum(to_string = "tiktok", serialize = "tik_tok")]
    TikTok,
    /// YouTube
    #[serde(rename = "youtube")]
    #[strum(to_string = "youtube")]
    YouTube,
    /// LinkedIn
    #[serde(rename = "linkedin")]
    #[strum(to_string = "linkedin")]
    LinkedIn,
    /// Twitter, now X
    #[serde(rename = "twitter_x")]
    #[strum(
        to_string = "twitter_x",
        serialize = "twitter (x)",
        serialize = "twitter",
        serialize = "x"
    )]
    TwitterX,
    /// Facebook
    #[serde(rename = "facebook")]
    #[strum(to_string = "facebook")]
    Facebook,
}

impl Platform {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::LinkedIn => "LinkedIn",
            Platform::TwitterX => "Twitter (X)",
            Platform::Facebook => "Facebook",
        }
    }

    /// Wire identifier, same as `Display`.
    pub fn id(&self) -> &'static str {
        self.into()
    }

    /// Match free-form model output to a platform.
    ///
    /// Case, spacing and punctuation are ignored. A name that starts with a
    /// platform's id counts as that platform, so format names such as
    /// "Instagram Reels" or "YouTube Shorts" resolve too.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialseo_core::Platform;
    ///
    /// assert_eq!(Platform::parse_lenient("Instagram Reels"), Some(Platform::Instagram));
    /// assert_eq!(Platform::parse_lenient("Twitter (X)"), Some(Platform::TwitterX));
    /// assert_eq!(Platform::parse_lenient("X"), Some(Platform::TwitterX));
    /// assert_eq!(Platform::parse_lenient("Pinterest"), None);
    /// ```
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let key = compact_key(raw);
        if key.is_empty() {
            return None;
        }
        if key == "x" {
            return Some(Platform::TwitterX);
        }
        Platform::iter()
            .find(|p| compact_key(p.id()) == key)
            .or_else(|| {
                Platform::iter().find(|p| {
                    let id = compact_key(p.id());
                    key.starts_with(&id) || (*p == Platform::TwitterX && key.starts_with("twitter"))
                })
            })
    }
}

/// Lowercase ASCII alphanumerics of `raw`, everything else dropped.
pub(crate) fn compact_key(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Platform::parse_lenient(&raw).ok_or_else(|| de::Error::unknown_variant(&raw, PLATFORM_IDS))
    }
}
