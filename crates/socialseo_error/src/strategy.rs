//! Response-shape errors raised while normalizing model output.

/// Specific failures of the response normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StrategyErrorKind {
    /// The model replied without any text payload
    #[display("Empty response from model")]
    EmptyResponse,
    /// The cleaned text is not a JSON document
    #[display("Malformed JSON in model response: {}", _0)]
    MalformedJson(String),
    /// The text is JSON but does not match the expected record shape
    #[display("Model response does not match expected schema: {}", _0)]
    SchemaMismatch(String),
}

impl StrategyErrorKind {
    /// True for both malformed-response variants.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            StrategyErrorKind::MalformedJson(_) | StrategyErrorKind::SchemaMismatch(_)
        )
    }
}

/// Strategy error with location tracking.
///
/// # Examples
///
/// ```
/// use socialseo_error::{StrategyError, StrategyErrorKind};
///
/// let err = StrategyError::new(StrategyErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("Empty response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Strategy Error: {} at line {} in {}", kind, line, file)]
pub struct StrategyError {
    /// The kind of error that occurred
    pub kind: StrategyErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StrategyError {
    /// Create a new strategy error with caller location tracking.
    #[track_caller]
    pub fn new(kind: StrategyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
