//! The strategy client.

use chrono::{Local, NaiveDate};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use socialseo_core::{
    Attachment, ContentRequest, GroundingSource, Mode, Platform, RequestConfig, RequestPart,
    StrategyResult, TargetingFilters, TrendHuntResponse, TrendIdea,
};
use socialseo_error::SocialSeoResult;
use socialseo_interface::GenerativeDriver;
use tracing::{debug, info, instrument};

use crate::encode::encode_attachments;
use crate::extraction::{parse_model_json, parse_model_json_with};
use crate::prompt::{BRAND_GUIDELINES_LABEL, SYSTEM_INSTRUCTION, compose_instruction, hunt_prompt};

/// Snapshot of everything a strategy request depends on.
///
/// # Examples
///
/// ```
/// use socialseo_core::{Attachment, Mode, Platform};
/// use socialseo_strategy::StrategyRequest;
///
/// let request = StrategyRequest::builder()
///     .mode(Mode::Editor)
///     .platform(Platform::LinkedIn)
///     .attachments(vec![Attachment::text("draft.txt", "My caption")])
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.mode(), Mode::Editor);
/// assert!(!request.live_trends());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct StrategyRequest {
    /// Operating mode
    #[builder(default)]
    mode: Mode,

    /// Target platform
    #[builder(default)]
    platform: Platform,

    /// Content files, in submission order
    #[builder(default)]
    #[serde(default)]
    attachments: Vec<Attachment>,

    /// Optional brand-guideline file
    #[builder(default)]
    #[serde(default)]
    brand_guidelines: Option<Attachment>,

    /// Targeting filters
    #[builder(default)]
    #[serde(default)]
    filters: TargetingFilters,

    /// Live-trend augmentation
    #[builder(default)]
    #[serde(default)]
    #[getter(skip)]
    live_trends: bool,
}

impl StrategyRequest {
    /// Start building a request.
    pub fn builder() -> StrategyRequestBuilder {
        StrategyRequestBuilder::default()
    }

    /// Request with every field given.
    pub fn from_parts(
        mode: Mode,
        platform: Platform,
        attachments: Vec<Attachment>,
        brand_guidelines: Option<Attachment>,
        filters: TargetingFilters,
        live_trends: bool,
    ) -> Self {
        Self {
            mode,
            platform,
            attachments,
            brand_guidelines,
            filters,
            live_trends,
        }
    }

    /// Whether live-trend augmentation is on.
    pub fn live_trends(&self) -> bool {
        self.live_trends
    }
}

/// A parsed reply plus the web sources the service grounded it on.
#[derive(Debug, Clone, PartialEq)]
pub struct Grounded<T> {
    /// Parsed value
    pub value: T,
    /// Sources reported by the service; empty when search was off
    pub sources: Vec<GroundingSource>,
}

impl<T> Grounded<T> {
    /// Drop the sources.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Builds requests, sends them through a driver and parses the replies.
///
/// Performs no precondition checks; the caller validates credential and
/// attachment presence. No retries: every failure is terminal.
#[derive(Debug, Clone)]
pub struct StrategyClient<D> {
    driver: D,
    model: Option<String>,
}

impl<D: GenerativeDriver> StrategyClient<D> {
    /// Client using the driver's configured model.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            model: None,
        }
    }

    /// Override the model per request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// The wrapped driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Build the full request for a snapshot without sending it.
    ///
    /// # Errors
    ///
    /// Returns an attachment-read error if any attachment cannot be read.
    pub async fn build_request(&self, request: &StrategyRequest) -> SocialSeoResult<ContentRequest> {
        self.build_request_on(request, Local::now().date_naive())
            .await
    }

    /// [`build_request`](Self::build_request) with a fixed date for the
    /// live-trend directive.
    ///
    /// # Errors
    ///
    /// Returns an attachment-read error if any attachment cannot be read.
    pub async fn build_request_on(
        &self,
        request: &StrategyRequest,
        today: NaiveDate,
    ) -> SocialSeoResult<ContentRequest> {
        let instruction = compose_instruction(
            request.mode,
            request.platform,
            &request.filters,
            request.live_trends,
            request.brand_guidelines.is_some(),
            today,
        );

        let encoded =
            encode_attachments(request.attachments.iter().chain(&request.brand_guidelines))
                .await?;

        let mut parts = Vec::with_capacity(encoded.len() + 2);
        parts.push(RequestPart::Text(instruction));

        let content_count = request.attachments.len();
        let mut encoded = encoded.into_iter();
        parts.extend(encoded.by_ref().take(content_count));
        if let Some(brand) = encoded.next() {
            parts.push(RequestPart::Text(BRAND_GUIDELINES_LABEL.to_string()));
            parts.push(brand);
        }

        Ok(ContentRequest {
            model: self.model.clone(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            parts,
            config: RequestConfig::for_live_trends(request.live_trends),
        })
    }

    /// Build the trend-hunt request for a niche without sending it.
    pub fn build_hunt_request(&self, niche: &str) -> ContentRequest {
        ContentRequest {
            model: self.model.clone(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            parts: vec![RequestPart::Text(hunt_prompt(niche))],
            config: RequestConfig::with_search(),
        }
    }

    /// Generate a strategy for a snapshot.
    ///
    /// # Errors
    ///
    /// Attachment-read, transport, empty-response and malformed-response
    /// failures are returned as-is.
    pub async fn generate_strategy(
        &self,
        request: &StrategyRequest,
    ) -> SocialSeoResult<StrategyResult> {
        self.generate_strategy_grounded(request)
            .await
            .map(Grounded::into_inner)
    }

    /// Generate a strategy and keep the grounding sources.
    ///
    /// # Errors
    ///
    /// Same as [`generate_strategy`](Self::generate_strategy).
    #[instrument(
        skip(self, request),
        fields(
            provider = self.driver.provider_name(),
            mode = %request.mode,
            platform = %request.platform,
            attachments = request.attachments.len(),
            brand_guidelines = request.brand_guidelines.is_some(),
            live_trends = request.live_trends,
        )
    )]
    pub async fn generate_strategy_grounded(
        &self,
        request: &StrategyRequest,
    ) -> SocialSeoResult<Grounded<StrategyResult>> {
        let built = self.build_request(request).await?;
        debug!(
            parts = built.parts.len(),
            search = built.config.search(),
            "Strategy request built"
        );

        let response = self.driver.generate(&built).await?;
        let value: StrategyResult = parse_model_json_with(response.text.as_deref(), |candidate| {
            fill_echoed_targets(candidate, request.platform, request.mode)
        })?;

        info!(
            platform = %value.platform,
            hashtags = value.hashtags.len(),
            sources = response.sources.len(),
            "Strategy generated"
        );
        Ok(Grounded {
            value,
            sources: response.sources,
        })
    }

    /// Hunt trends for a niche. Ideas keep the model's order.
    ///
    /// # Errors
    ///
    /// Transport, empty-response and malformed-response failures.
    pub async fn hunt_trends(&self, niche: &str) -> SocialSeoResult<Vec<TrendIdea>> {
        self.hunt_trends_grounded(niche)
            .await
            .map(Grounded::into_inner)
    }

    /// Hunt trends and keep the grounding sources.
    ///
    /// # Errors
    ///
    /// Same as [`hunt_trends`](Self::hunt_trends).
    #[instrument(skip(self), fields(provider = self.driver.provider_name()))]
    pub async fn hunt_trends_grounded(&self, niche: &str) -> SocialSeoResult<Grounded<Vec<TrendIdea>>> {
        let built = self.build_hunt_request(niche);
        let response = self.driver.generate(&built).await?;
        let hunt: TrendHuntResponse = parse_model_json(response.text.as_deref())?;

        info!(
            ideas = hunt.trend_hunter_ideas.len(),
            sources = response.sources.len(),
            "Trend hunt complete"
        );
        Ok(Grounded {
            value: hunt.trend_hunter_ideas,
            sources: response.sources,
        })
    }
}

/// Put the requested platform and mode into a reply whose echo of them is
/// missing or unrecognizable.
fn fill_echoed_targets(candidate: &mut Value, platform: Platform, mode: Mode) {
    let Some(object) = candidate.as_object_mut() else {
        return;
    };

    let echoed_platform = object.get("platform").and_then(Value::as_str);
    if echoed_platform.and_then(Platform::parse_lenient).is_none() {
        debug!(echoed = ?echoed_platform, sent = %platform, "Using requested platform");
        object.insert("platform".to_string(), Value::from(platform.id()));
    }

    let echoed_mode = object.get("mode").and_then(Value::as_str);
    if echoed_mode.and_then(Mode::parse_lenient).is_none() {
        debug!(echoed = ?echoed_mode, sent = %mode, "Using requested mode");
        object.insert("mode".to_string(), Value::from(mode.to_string()));
    }
}
