//! Test utilities shared by the integration tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};

/// A complete strategy reply for the given platform and mode.
#[allow(dead_code)]
pub fn strategy_json(platform: &str, mode: &str) -> String {
    serde_json::json!({
        "platform": platform,
        "mode": mode,
        "primary_goal": "Drive saves",
        "hook": "Stop scrolling: this changes everything",
        "title": "The 30 second fix",
        "caption": "Here is how we did it.",
        "hashtags": ["#fyp", "#howto"],
        "recommended_post_format": "Reel",
        "recommended_length": {"video_seconds": 30, "caption_max_characters": 2200},
        "posting_strategy": {
            "recommended_posting_time_local": "Thursday 6pm",
            "suggested_frequency_per_week": 4,
            "cross_posting_tips": "Cut a 9:16 version for Shorts"
        },
        "trend_metadata": {
            "trend_detected": true,
            "trend_name": "Silent review",
            "trend_source": "TikTok Creative Center",
            "how_to_apply_trend": "Open with a silent reaction"
        },
        "sentiment_analysis": {"overall_tone": "Upbeat", "vibe_badge": "Main Character"}
    })
    .to_string()
}

/// A hunt reply with `count` ideas titled "Idea 1", "Idea 2", ...
#[allow(dead_code)]
pub fn hunt_json(count: usize) -> String {
    let ideas: Vec<_> = (1..=count)
        .map(|n| {
            serde_json::json!({
                "idea_title": format!("Idea {}", n),
                "idea_description": format!("Description {}", n),
                "why_it_works": "Searchable and timely",
                "suggested_platforms": ["instagram", "tiktok"]
            })
        })
        .collect();
    serde_json::json!({ "trend_hunter_ideas": ideas }).to_string()
}
