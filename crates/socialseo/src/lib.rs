//! SocialSEO - social media strategy generation on top of Gemini
//!
//! SocialSEO turns uploaded content (video, images, screenshots, text) into a
//! publish-ready strategy for one social platform: hook, caption, hashtags,
//! posting schedule, trend notes and a brand compliance check. It can also
//! hunt for trending content ideas in a niche using grounded web search.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use socialseo::{Attachment, FormController, GeminiClient, Platform, StrategyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StrategyClient::new(GeminiClient::new(std::env::var("GEMINI_API_KEY")?)?);
//!     let form = FormController::new(client);
//!
//!     form.set_platform(Platform::Instagram);
//!     form.add_attachment(Attachment::from_path_guessed("reel.mp4"));
//!     form.generate().await;
//!
//!     if let Some(result) = form.snapshot().result() {
//!         println!("{}", socialseo::StrategyCard(result));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry stdout span export
//!
//! # Architecture
//!
//! - `socialseo_error` - Error types
//! - `socialseo_core` - Platforms, modes, filters, attachments, results
//! - `socialseo_interface` - `GenerativeDriver` trait
//! - `socialseo_models` - Gemini REST driver
//! - `socialseo_strategy` - Request assembly and response normalization
//! - `socialseo_form` - Form controller and progress indicator
//!
//! This crate (`socialseo`) re-exports everything for convenience and adds
//! configuration loading, result rendering and the `socialseo` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
pub mod observability;
mod render;

pub use config::SocialSeoConfig;
pub use render::{
    DEFAULT_EXPORT_FILE, SourceList, StrategyCard, TrendCards, catalog, export_json, hunt_json,
};

// Re-export workspace crates
pub use socialseo_core::*;
pub use socialseo_error::*;
pub use socialseo_form::*;
pub use socialseo_interface::*;
pub use socialseo_models::*;
pub use socialseo_strategy::*;
