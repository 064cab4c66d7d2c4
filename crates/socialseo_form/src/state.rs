//! Form state as seen by front ends.

use derive_getters::Getters;
use socialseo_core::{
    Attachment, GroundingSource, Mode, Platform, StrategyResult, TargetingFilters, TrendIdea,
};
use socialseo_error::ErrorCategory;
use socialseo_strategy::StrategyRequest;

use crate::Progress;

/// Read-only view of the controller.
///
/// Obtained from [`FormController::snapshot`](crate::FormController::snapshot);
/// edits go through the controller.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct FormState {
    /// Selected mode
    mode: Mode,
    /// Selected platform
    platform: Platform,
    /// Content files
    attachments: Vec<Attachment>,
    /// Optional brand-guideline file
    brand_guidelines: Option<Attachment>,
    /// Targeting filters
    filters: TargetingFilters,
    /// Live-trend augmentation
    live_trends: bool,
    /// A request is outstanding
    in_flight: bool,
    /// Progress reading at snapshot time
    progress: Progress,
    /// Last user-facing error
    error: Option<String>,
    /// Category of the last error
    error_category: Option<ErrorCategory>,
    /// Last strategy
    result: Option<StrategyResult>,
    /// Last trend ideas, in model order
    trend_ideas: Option<Vec<TrendIdea>>,
    /// Sources behind the last result or ideas
    sources: Vec<GroundingSource>,
}

impl FormState {
    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub(crate) fn attachments_mut(&mut self) -> &mut Vec<Attachment> {
        &mut self.attachments
    }

    pub(crate) fn set_brand_guidelines(&mut self, brand: Option<Attachment>) {
        self.brand_guidelines = brand;
    }

    pub(crate) fn filters_mut(&mut self) -> &mut TargetingFilters {
        &mut self.filters
    }

    pub(crate) fn set_live_trends(&mut self, on: bool) {
        self.live_trends = on;
    }

    pub(crate) fn set_in_flight(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
    }

    pub(crate) fn set_progress(&mut self, progress: Progress) {
        self.progress = progress;
    }

    pub(crate) fn set_error(&mut self, message: String, category: ErrorCategory) {
        self.error = Some(message);
        self.error_category = Some(category);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
        self.error_category = None;
    }

    pub(crate) fn set_result(&mut self, result: StrategyResult, sources: Vec<GroundingSource>) {
        self.result = Some(result);
        self.sources = sources;
    }

    pub(crate) fn clear_result(&mut self) {
        self.result = None;
    }

    pub(crate) fn set_trend_ideas(&mut self, ideas: Vec<TrendIdea>, sources: Vec<GroundingSource>) {
        self.trend_ideas = Some(ideas);
        self.sources = sources;
    }

    pub(crate) fn clear_trend_ideas(&mut self) {
        self.trend_ideas = None;
    }

    /// Strategy request built from the current fields.
    pub fn to_request(&self) -> StrategyRequest {
        StrategyRequest::from_parts(
            self.mode,
            self.platform,
            self.attachments.clone(),
            self.brand_guidelines.clone(),
            self.filters.clone(),
            self.live_trends,
        )
    }
}
