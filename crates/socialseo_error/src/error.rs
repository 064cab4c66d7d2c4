//! Top-level error wrapper types.

use crate::{
    AttachmentError, ConfigError, ErrorCategory, ExportError, FormError, GeminiError, JsonError,
    StrategyError,
};

/// Every failure the workspace can report.
///
/// # Examples
///
/// ```
/// use socialseo_error::{GeminiError, GeminiErrorKind, SocialSeoError};
///
/// let gemini_err = GeminiError::new(GeminiErrorKind::ApiRequest("Connection failed".into()));
/// let err: SocialSeoError = gemini_err.into();
/// assert!(format!("{}", err).contains("Connection failed"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SocialSeoErrorKind {
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini transport error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Attachment encoding error
    #[from(AttachmentError)]
    Attachment(AttachmentError),
    /// Model response normalization error
    #[from(StrategyError)]
    Strategy(StrategyError),
    /// Form precondition error
    #[from(FormError)]
    Form(FormError),
    /// Result export error
    #[from(ExportError)]
    Export(ExportError),
}

/// SocialSEO error with kind discrimination.
///
/// # Examples
///
/// ```
/// use socialseo_error::{ConfigError, SocialSeoResult};
///
/// fn might_fail() -> SocialSeoResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("SocialSEO Error: {}", _0)]
pub struct SocialSeoError(Box<SocialSeoErrorKind>);

impl SocialSeoError {
    /// Create a new error from a kind.
    pub fn new(kind: SocialSeoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SocialSeoErrorKind {
        &self.0
    }

    /// Classify the error.
    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            SocialSeoErrorKind::Gemini(_) => ErrorCategory::Transport,
            SocialSeoErrorKind::Strategy(_) => ErrorCategory::Response,
            SocialSeoErrorKind::Attachment(_) => ErrorCategory::Attachment,
            SocialSeoErrorKind::Form(_) => ErrorCategory::Precondition,
            SocialSeoErrorKind::Export(_) => ErrorCategory::Output,
            SocialSeoErrorKind::Json(_) | SocialSeoErrorKind::Config(_) => {
                ErrorCategory::Configuration
            }
        }
    }

    /// The strategy failure, if this is one.
    pub fn as_strategy(&self) -> Option<&StrategyError> {
        match self.kind() {
            SocialSeoErrorKind::Strategy(e) => Some(e),
            _ => None,
        }
    }

    /// The form precondition failure, if this is one.
    pub fn as_form(&self) -> Option<&FormError> {
        match self.kind() {
            SocialSeoErrorKind::Form(e) => Some(e),
            _ => None,
        }
    }

    /// The Gemini transport failure, if this is one.
    pub fn as_gemini(&self) -> Option<&GeminiError> {
        match self.kind() {
            SocialSeoErrorKind::Gemini(e) => Some(e),
            _ => None,
        }
    }

    /// The attachment failure, if this is one.
    pub fn as_attachment(&self) -> Option<&AttachmentError> {
        match self.kind() {
            SocialSeoErrorKind::Attachment(e) => Some(e),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to SocialSeoErrorKind
impl<T> From<T> for SocialSeoError
where
    T: Into<SocialSeoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for SocialSEO operations.
///
/// # Examples
///
/// ```
/// use socialseo_error::{GeminiError, GeminiErrorKind, SocialSeoResult};
///
/// fn fetch_data() -> SocialSeoResult<String> {
///     Err(GeminiError::new(GeminiErrorKind::HttpError {
///         status_code: 404,
///         message: "Not Found".into(),
///     }))?
/// }
/// ```
pub type SocialSeoResult<T> = std::result::Result<T, SocialSeoError>;
