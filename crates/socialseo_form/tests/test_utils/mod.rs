//! Test utilities for the form controller tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};

use socialseo_form::{FormController, ProgressConfig};
use socialseo_strategy::StrategyClient;
use std::sync::Arc;

/// Controller over a shared mock so tests can inspect calls afterwards.
#[allow(dead_code)]
pub fn controller(mock: MockDriver) -> (FormController<Arc<MockDriver>>, Arc<MockDriver>) {
    controller_with(mock, ProgressConfig::new(10, 90.0, 5.0, 20))
}

/// Same as [`controller`] with explicit progress timing.
#[allow(dead_code)]
pub fn controller_with(
    mock: MockDriver,
    progress: ProgressConfig,
) -> (FormController<Arc<MockDriver>>, Arc<MockDriver>) {
    let mock = Arc::new(mock);
    let form = FormController::with_progress_config(StrategyClient::new(mock.clone()), progress);
    (form, mock)
}

/// A complete strategy reply.
#[allow(dead_code)]
pub fn strategy_json(platform: &str, mode: &str) -> String {
    serde_json::json!({
        "platform": platform,
        "mode": mode,
        "primary_goal": "Grow followers",
        "hook": "Nobody tells you this",
        "caption": "Full breakdown inside.",
        "hashtags": ["#growth"],
        "recommended_post_format": "Carousel",
        "recommended_length": {"caption_max_characters": 2200},
        "posting_strategy": {
            "recommended_posting_time_local": "Monday 8am",
            "suggested_frequency_per_week": 3,
            "cross_posting_tips": "Reuse slides as a LinkedIn document"
        },
        "sentiment_analysis": {"overall_tone": "Confident", "vibe_badge": "Big Brain"}
    })
    .to_string()
}

/// A hunt reply with `count` ideas.
#[allow(dead_code)]
pub fn hunt_json(count: usize) -> String {
    let ideas: Vec<_> = (1..=count)
        .map(|n| {
            serde_json::json!({
                "idea_title": format!("Trend {}", n),
                "idea_description": format!("Do thing {}", n),
                "why_it_works": "Rising search volume",
                "suggested_platforms": ["tiktok"]
            })
        })
        .collect();
    serde_json::json!({ "trend_hunter_ideas": ideas }).to_string()
}
