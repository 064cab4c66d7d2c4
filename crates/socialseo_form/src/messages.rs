//! User-facing failure messages.

use socialseo_error::SocialSeoError;

/// Shown for any non-precondition failure of a strategy request.
pub const GENERATE_FAILED: &str =
    "Connection Failed. Please check your API Key or Internet connection.";

/// Shown for any non-precondition failure of a trend hunt.
pub const HUNT_FAILED: &str = "Trend Hunt Failed. Try again.";

/// Message a user gets to see for `err`.
///
/// Precondition failures keep their specific wording. Everything else
/// collapses into `fallback`; the detail only goes to the log.
///
/// # Examples
///
/// ```
/// use socialseo_error::{FormError, FormErrorKind, GeminiError, GeminiErrorKind, SocialSeoError};
/// use socialseo_form::{GENERATE_FAILED, user_message};
///
/// let precondition: SocialSeoError = FormError::new(FormErrorKind::NoAttachments).into();
/// assert_eq!(user_message(&precondition, GENERATE_FAILED), "Please upload content to analyze.");
///
/// let transport: SocialSeoError =
///     GeminiError::new(GeminiErrorKind::ApiRequest("connection reset".into())).into();
/// assert_eq!(user_message(&transport, GENERATE_FAILED), GENERATE_FAILED);
/// ```
pub fn user_message(err: &SocialSeoError, fallback: &str) -> String {
    match err.as_form() {
        Some(form) => form.kind.to_string(),
        None => fallback.to_string(),
    }
}
