//! Free-text targeting filters.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Targeting parameters interpolated into the instruction text.
///
/// Values are free text and may be empty. Only `niche` is ever checked, and
/// only by the trend-hunt path.
///
/// # Examples
///
/// ```
/// use socialseo_core::TargetingFilters;
///
/// let filters = TargetingFilters::builder()
///     .niche("vegan cooking")
///     .geography("Berlin")
///     .build()
///     .unwrap();
///
/// assert_eq!(filters.niche(), "vegan cooking");
/// assert_eq!(filters.target_language(), "");
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Getters,
    Serialize,
    Deserialize,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct TargetingFilters {
    /// Content niche, e.g. "home espresso"
    niche: String,
    /// Geographic focus
    geography: String,
    /// Intended audience
    target_audience: String,
    /// Language of the generated copy
    target_language: String,
    /// Demographic focus
    target_demographics: String,
}

impl TargetingFilters {
    /// Start building a filter set.
    pub fn builder() -> TargetingFiltersBuilder {
        TargetingFiltersBuilder::default()
    }

    /// Niche with surrounding whitespace removed, or `None` when blank.
    pub fn trimmed_niche(&self) -> Option<&str> {
        let niche = self.niche.trim();
        (!niche.is_empty()).then_some(niche)
    }

    /// Replace the niche.
    pub fn set_niche(&mut self, niche: impl Into<String>) {
        self.niche = niche.into();
    }

    /// Replace the geography.
    pub fn set_geography(&mut self, geography: impl Into<String>) {
        self.geography = geography.into();
    }

    /// Replace the target audience.
    pub fn set_target_audience(&mut self, audience: impl Into<String>) {
        self.target_audience = audience.into();
    }

    /// Replace the target language.
    pub fn set_target_language(&mut self, language: impl Into<String>) {
        self.target_language = language.into();
    }

    /// Replace the target demographics.
    pub fn set_target_demographics(&mut self, demographics: impl Into<String>) {
        self.target_demographics = demographics.into();
    }
}
