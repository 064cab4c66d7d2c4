//! Core data types for the SocialSEO strategy client.
//!
//! This crate provides the foundation data types shared by the strategy
//! client, the form controller and the Gemini driver: the platform and mode
//! catalog, targeting filters, attachments, the wire-neutral request and
//! response types, and the records the model is asked to produce.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attachment;
mod credential;
mod filters;
mod mode;
mod platform;
mod request;
mod strategy;
mod trend;

pub use attachment::{Attachment, AttachmentSource, DEFAULT_MIME_TYPE};
pub use credential::ApiKey;
pub use filters::{TargetingFilters, TargetingFiltersBuilder};
pub use mode::Mode;
pub use platform::Platform;
pub use request::{ContentRequest, ContentResponse, GroundingSource, RequestConfig, RequestPart};
pub use strategy::{
    BrandGuard, CompetitorInsights, PostingStrategy, RecommendedLength, SentimentAnalysis,
    StrategyResult, TrendMetadata,
};
pub use trend::{TrendHuntResponse, TrendIdea};
