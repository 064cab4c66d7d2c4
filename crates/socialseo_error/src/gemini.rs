//! Gemini transport error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// No API key was configured for the client
    #[display("Gemini API key not configured")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// API request could not be sent or its body could not be read
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Service replied with a body that is not a generateContent envelope
    #[display("Failed to decode Gemini response envelope: {}", _0)]
    ResponseDecode(String),
    /// Request was blocked before generation
    #[display("Prompt blocked by Gemini: {}", _0)]
    PromptBlocked(String),
}

impl GeminiErrorKind {
    /// Whether the service rejected the credential.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::MissingApiKey
                | GeminiErrorKind::HttpError {
                    status_code: 401 | 403,
                    ..
                }
        )
    }

    /// Whether the service reported quota exhaustion.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::HttpError {
                status_code: 429,
                ..
            }
        )
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use socialseo_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("API key"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
