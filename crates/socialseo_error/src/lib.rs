//! Error types for the SocialSEO workspace.
//!
//! This crate provides the foundation error types used throughout SocialSEO.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Every error can be classified into an [`ErrorCategory`], which is what the
//! form controller uses to decide which message a user gets to see.
//!
//! # Examples
//!
//! ```
//! use socialseo_error::{ErrorCategory, GeminiError, GeminiErrorKind, SocialSeoResult};
//!
//! fn fetch_data() -> SocialSeoResult<String> {
//!     Err(GeminiError::new(GeminiErrorKind::ApiRequest("Connection refused".into())))?
//! }
//!
//! let err = fetch_data().unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Transport);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attachment;
mod category;
mod config;
mod error;
mod export;
mod form;
mod gemini;
mod json;
mod strategy;

pub use attachment::{AttachmentError, AttachmentErrorKind};
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use error::{SocialSeoError, SocialSeoErrorKind, SocialSeoResult};
pub use export::{ExportError, ExportErrorKind};
pub use form::{FormError, FormErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use strategy::{StrategyError, StrategyErrorKind};
