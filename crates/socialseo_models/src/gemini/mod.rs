//! Google Gemini REST driver.

mod client;
mod config;
pub mod protocol;

pub use client::GeminiClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, FALLBACK_API_KEY_ENV, GeminiConfig};
