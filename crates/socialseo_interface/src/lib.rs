//! Trait definitions for SocialSEO generative backends.
//!
//! The strategy client is generic over [`GenerativeDriver`], so the Gemini
//! implementation can be swapped for a scripted mock in tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::GenerativeDriver;
