//! Gemini connection settings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use socialseo_core::ApiKey;

/// Model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// REST root of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Variable consulted when the configured one is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// `[gemini]` configuration section.
///
/// # Examples
///
/// ```
/// use socialseo_models::GeminiConfig;
///
/// let config = GeminiConfig::default();
/// assert_eq!(config.model(), "gemini-2.5-flash");
/// assert_eq!(config.api_key_env(), "GEMINI_API_KEY");
/// assert!(config.api_key().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct GeminiConfig {
    /// Model identifier
    model: String,
    /// API root, without a trailing `/models`
    base_url: String,
    /// Environment variable holding the key
    api_key_env: String,
    /// Key given directly in configuration; wins over the environment
    #[serde(skip_serializing)]
    api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
        }
    }
}

impl GeminiConfig {
    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the key directly.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Find the credential: configured value, then `api_key_env`, then
    /// `API_KEY`. Blank values count as absent.
    ///
    /// Returns an empty key rather than failing; callers decide whether a
    /// missing key is an error.
    pub fn resolve_api_key(&self) -> ApiKey {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Same as [`resolve_api_key`](Self::resolve_api_key) with a custom
    /// variable lookup.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> ApiKey
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidates = self
            .api_key
            .clone()
            .into_iter()
            .chain(lookup(&self.api_key_env))
            .chain(lookup(FALLBACK_API_KEY_ENV));

        candidates
            .map(ApiKey::new)
            .find(|key| !key.is_empty())
            .unwrap_or_default()
    }
}
