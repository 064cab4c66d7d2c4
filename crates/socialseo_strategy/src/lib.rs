//! Strategy client for SocialSEO.
//!
//! Builds one content-analysis request from a snapshot of the form state,
//! sends it through a [`GenerativeDriver`](socialseo_interface::GenerativeDriver)
//! and normalizes the model's reply into typed records.
//!
//! # Flow
//!
//! 1. [`compose_instruction`] turns platform, mode and filters into the
//!    instruction text with the reply schema from [`strategy_schema`],
//!    adding the live-trend, competitor and brand directives as needed.
//! 2. [`encode_attachments`] reads and base64-encodes every attachment
//!    concurrently.
//! 3. The driver sends the request.
//! 4. [`parse_model_json`] strips markdown fences, looks for embedded JSON
//!    and parses the reply.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod encode;
mod extraction;
mod prompt;

pub use client::{Grounded, StrategyClient, StrategyRequest, StrategyRequestBuilder};
pub use encode::{encode_attachment, encode_attachments};
pub use extraction::{parse_model_json, parse_model_json_with, strip_code_fence};
pub use prompt::{
    BRAND_GUIDELINES_LABEL, BRAND_DIRECTIVE, COMPETITOR_DIRECTIVE, SYSTEM_INSTRUCTION,
    compose_instruction, hunt_prompt, live_trend_directive, strategy_schema,
};
