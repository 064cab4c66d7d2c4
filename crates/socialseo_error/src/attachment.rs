//! Attachment encoding errors.

/// Conditions that stop an attachment from being encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AttachmentErrorKind {
    /// The attachment's bytes could not be read
    #[display("Failed to read attachment '{}': {}", name, message)]
    Read {
        /// Attachment name as shown to the user
        name: String,
        /// Underlying I/O message
        message: String,
    },
    /// An encoding task ended without producing a result
    #[display("Encoding task for attachment '{}' did not complete: {}", name, message)]
    TaskFailed {
        /// Attachment name as shown to the user
        name: String,
        /// Join error message
        message: String,
    },
}

/// Attachment error with location tracking.
///
/// # Examples
///
/// ```
/// use socialseo_error::{AttachmentError, AttachmentErrorKind};
///
/// let err = AttachmentError::new(AttachmentErrorKind::Read {
///     name: "clip.mp4".to_string(),
///     message: "No such file or directory".to_string(),
/// });
/// assert!(format!("{}", err).contains("clip.mp4"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Attachment Error: {} at line {} in {}", kind, line, file)]
pub struct AttachmentError {
    /// The kind of error that occurred
    pub kind: AttachmentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AttachmentError {
    /// Create a new attachment error with caller location tracking.
    #[track_caller]
    pub fn new(kind: AttachmentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
