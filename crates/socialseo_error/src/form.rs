//! Precondition failures detected by the form controller.

/// Preconditions checked before any remote call is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FormErrorKind {
    /// No credential is available
    #[display("API Key missing. Please restart and select a paid key.")]
    MissingApiKey,
    /// A content-requiring mode was submitted without attachments
    #[display("Please upload content to analyze.")]
    NoAttachments,
    /// Trend hunting was requested without a niche
    #[display("Please enter a Niche to hunt trends for.")]
    MissingNiche,
    /// A request is already outstanding
    #[display("A request is already in progress.")]
    RequestInFlight,
}

/// Form precondition error with location tracking.
///
/// The display text of the kind doubles as the user-facing message.
///
/// # Examples
///
/// ```
/// use socialseo_error::{FormError, FormErrorKind};
///
/// let err = FormError::new(FormErrorKind::NoAttachments);
/// assert_eq!(err.kind.to_string(), "Please upload content to analyze.");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Form Error: {} at line {} in {}", kind, line, file)]
pub struct FormError {
    /// The kind of error that occurred
    pub kind: FormErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FormError {
    /// Create a new form error with caller location tracking.
    #[track_caller]
    pub fn new(kind: FormErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
