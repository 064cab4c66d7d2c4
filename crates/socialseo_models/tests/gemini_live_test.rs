#![cfg(feature = "api")]

// Live call against the real Gemini API.
//
// Requires GEMINI_API_KEY (or API_KEY) in the environment or a .env file.
// Run with: cargo test -p socialseo_models --features api

use socialseo_core::{ContentRequest, RequestConfig, RequestPart};
use socialseo_interface::GenerativeDriver;
use socialseo_models::{GeminiClient, GeminiConfig};

#[tokio::test]
async fn test_live_strict_json_reply() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::from_config_env(&GeminiConfig::default())?;
    assert!(client.has_credential(), "GEMINI_API_KEY not set");

    let request = ContentRequest {
        model: None,
        system_instruction: "Always respond with valid JSON.".to_string(),
        parts: vec![RequestPart::Text(
            "Return {\"greeting\": \"hello\"} and nothing else.".to_string(),
        )],
        config: RequestConfig::strict_json_only(),
    };

    let response = client.generate(&request).await?;
    let text = response.text.unwrap_or_default();
    let value: serde_json::Value = serde_json::from_str(&text)?;
    assert!(value.get("greeting").is_some());
    Ok(())
}
