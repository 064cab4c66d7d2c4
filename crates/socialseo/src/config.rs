//! Layered configuration for the `socialseo` binary and library users.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from socialseo.toml)
//! - `~/.config/socialseo/socialseo.toml`
//! - `./socialseo.toml`
//! - An explicit file (`--config`)
//! - Environment variables prefixed with `SOCIALSEO_`, `__` between keys

use ::config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use socialseo_error::{ConfigError, SocialSeoError, SocialSeoResult};
use socialseo_form::ProgressConfig;
use socialseo_models::{GeminiClient, GeminiConfig};
use socialseo_strategy::StrategyClient;
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../socialseo.toml");

/// Top-level SocialSEO configuration.
///
/// # Example
///
/// ```no_run
/// use socialseo::SocialSeoConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SocialSeoConfig::load()?;
/// println!("Model: {}", config.gemini.model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SocialSeoConfig {
    /// Gemini connection settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Progress indicator timing
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl SocialSeoConfig {
    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> SocialSeoResult<Self> {
        finish(bundled_builder())
    }

    /// Load configuration from a specific file path, on top of nothing.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SocialSeoResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                SocialSeoError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SocialSeoError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load every layer.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse.
    pub fn load() -> SocialSeoResult<Self> {
        Self::load_with(None::<&Path>)
    }

    /// Load every layer, with `explicit` (when given) above the user files.
    ///
    /// User config files are optional; the explicit file is required.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing or any present
    /// source fails to parse.
    #[instrument]
    pub fn load_with<P>(explicit: Option<P>) -> SocialSeoResult<Self>
    where
        P: AsRef<Path> + std::fmt::Debug,
    {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled");

        let mut builder = bundled_builder();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/socialseo/socialseo.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("socialseo").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder = builder.add_source(
            Environment::with_prefix("SOCIALSEO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        finish(builder)
    }

    /// Strategy client over a Gemini driver built from this configuration.
    ///
    /// The credential comes from `gemini.api_key`, then the configured
    /// environment variable, then `API_KEY`. A missing key is not an error
    /// here; the form controller rejects submissions without one.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn strategy_client(&self) -> SocialSeoResult<StrategyClient<GeminiClient>> {
        let driver = GeminiClient::from_config_env(&self.gemini)?;
        Ok(StrategyClient::new(driver))
    }
}

fn bundled_builder() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> SocialSeoResult<SocialSeoConfig> {
    builder
        .build()
        .map_err(|e| {
            SocialSeoError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?
        .try_deserialize()
        .map_err(|e| {
            SocialSeoError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })
}
