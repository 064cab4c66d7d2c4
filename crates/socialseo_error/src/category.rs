//! Coarse error classification.

/// Broad class of a failure.
///
/// Transport and response failures share one user-facing message but stay
/// distinguishable here for diagnostics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
pub enum ErrorCategory {
    /// Detected before any remote interaction
    #[display("precondition")]
    Precondition,
    /// Could not reach the service, or the service refused the request
    #[display("transport")]
    Transport,
    /// The service answered but the payload was empty or unusable
    #[display("response")]
    Response,
    /// A local attachment could not be read
    #[display("attachment")]
    Attachment,
    /// Configuration could not be loaded or serialized
    #[display("configuration")]
    Configuration,
    /// A result could not be written out
    #[display("output")]
    Output,
}

impl ErrorCategory {
    /// Whether the failure happened on the way to or back from the service.
    pub fn is_remote(&self) -> bool {
        matches!(self, ErrorCategory::Transport | ErrorCategory::Response)
    }
}
