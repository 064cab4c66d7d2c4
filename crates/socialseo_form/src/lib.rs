//! Form controller for SocialSEO.
//!
//! [`FormController`] owns the form state any front end edits (mode,
//! platform, attachments, filters, live-trend flag), enforces the
//! preconditions of a submission, runs the strategy client and turns every
//! failure into a user-facing message. A [`ProgressTicker`] drives a
//! simulated progress indicator while a request is in flight.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod messages;
mod progress;
mod state;

pub use controller::{FormController, SubmissionOutcome};
pub use messages::{GENERATE_FAILED, HUNT_FAILED, user_message};
pub use progress::{Phase, Progress, ProgressConfig, ProgressTicker, advance, random_step};
pub use state::FormState;
