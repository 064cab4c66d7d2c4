//! Trend hunting records.

use crate::Platform;
use serde::{Deserialize, Serialize};

/// One ranked content concept proposed by the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrendIdea {
    /// Short title
    pub idea_title: String,
    /// What the content would be
    pub idea_description: String,
    /// Why the model expects it to perform
    pub why_it_works: String,
    /// Platforms the idea fits, exactly as the model named them
    #[serde(default)]
    pub suggested_platforms: Vec<String>,
}

impl TrendIdea {
    /// Body of the text note used to seed a creator-mode request.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialseo_core::TrendIdea;
    ///
    /// let idea = TrendIdea {
    ///     idea_title: "Tofu 3 ways".to_string(),
    ///     idea_description: "Quick cuts".to_string(),
    ///     why_it_works: "Fast pacing".to_string(),
    ///     suggested_platforms: vec![],
    /// };
    /// assert_eq!(
    ///     idea.seed_text(),
    ///     "Create content based on this trend: Tofu 3 ways\n\nQuick cuts"
    /// );
    /// ```
    pub fn seed_text(&self) -> String {
        format!(
            "Create content based on this trend: {}\n\n{}",
            self.idea_title, self.idea_description
        )
    }

    /// Suggested platforms this client can target, in order, without
    /// duplicates. Names that match no platform are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialseo_core::{Platform, TrendIdea};
    ///
    /// let idea = TrendIdea {
    ///     idea_title: "Tofu 3 ways".to_string(),
    ///     idea_description: "Quick cuts".to_string(),
    ///     why_it_works: "Fast pacing".to_string(),
    ///     suggested_platforms: vec![
    ///         "YouTube Shorts".to_string(),
    ///         "Pinterest".to_string(),
    ///         "youtube".to_string(),
    ///     ],
    /// };
    /// assert_eq!(idea.known_platforms(), vec![Platform::YouTube]);
    /// ```
    pub fn known_platforms(&self) -> Vec<Platform> {
        let mut platforms = Vec::new();
        for platform in self
            .suggested_platforms
            .iter()
            .filter_map(|name| Platform::parse_lenient(name))
        {
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }
        platforms
    }
}

/// Envelope the hunt prompt asks the model to reply with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendHuntResponse {
    /// Ideas in the model's ranking order
    pub trend_hunter_ideas: Vec<TrendIdea>,
}
