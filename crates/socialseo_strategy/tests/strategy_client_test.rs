// Tests for StrategyClient using a scripted mock driver.

mod test_utils;

use chrono::NaiveDate;
use socialseo_core::{
    Attachment, GroundingSource, Mode, Platform, RequestPart, TargetingFilters,
};
use socialseo_error::{ErrorCategory, GeminiErrorKind, SocialSeoErrorKind, StrategyErrorKind};
use socialseo_strategy::{
    BRAND_DIRECTIVE, BRAND_GUIDELINES_LABEL, COMPETITOR_DIRECTIVE, StrategyClient,
    StrategyRequest, SYSTEM_INSTRUCTION,
};
use std::io::Write;
use test_utils::{MockDriver, hunt_json, strategy_json};

fn photo() -> Attachment {
    Attachment::from_bytes("photo.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF])
}

fn first_text(parts: &[RequestPart]) -> &str {
    parts.first().and_then(RequestPart::as_text).unwrap_or_default()
}

//
// ─── SCENARIOS ──────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn test_creator_request_uses_strict_json() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_success(strategy_json(
        "instagram",
        "creator",
    )));
    let request = StrategyRequest::builder()
        .mode(Mode::Creator)
        .platform(Platform::Instagram)
        .attachments(vec![photo()])
        .build()?;

    let result = client.generate_strategy(&request).await?;
    assert_eq!(result.platform, Platform::Instagram);
    assert_eq!(result.platform.to_string(), "instagram");

    let sent = client.driver().last_request().expect("request recorded");
    assert!(sent.config.strict_json());
    assert!(!sent.config.search());
    assert_eq!(sent.system_instruction, SYSTEM_INSTRUCTION);
    assert_eq!(sent.parts.len(), 2);
    assert_eq!(
        sent.parts[1],
        RequestPart::InlineData {
            mime_type: "image/jpeg".to_string(),
            data: "/9j/".to_string(),
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_hunt_returns_ideas_in_model_order() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_success(hunt_json(5)));

    let ideas = client.hunt_trends("vegan cooking").await?;
    let titles: Vec<_> = ideas.iter().map(|i| i.idea_title.as_str()).collect();
    assert_eq!(titles, vec!["Idea 1", "Idea 2", "Idea 3", "Idea 4", "Idea 5"]);

    let sent = client.driver().last_request().expect("request recorded");
    assert!(sent.config.search());
    assert!(!sent.config.strict_json());
    assert!(first_text(&sent.parts).contains("\"vegan cooking\""));
    Ok(())
}

#[tokio::test]
async fn test_live_trends_enable_search_even_with_files() -> anyhow::Result<()> {
    for mode in [Mode::Creator, Mode::Editor, Mode::CompetitorSpy] {
        let client = StrategyClient::new(MockDriver::new_success(strategy_json(
            "tiktok",
            &mode.to_string(),
        )));
        let request = StrategyRequest::builder()
            .mode(mode)
            .platform(Platform::TikTok)
            .attachments(vec![photo(), photo()])
            .live_trends(true)
            .build()?;

        client.generate_strategy(&request).await?;

        let sent = client.driver().last_request().expect("request recorded");
        assert!(sent.config.search());
        assert!(!sent.config.strict_json());
        let instruction = first_text(&sent.parts);
        assert!(instruction.contains("STEP 1"));
        assert!(instruction.contains("STEP 2"));
        assert!(instruction.contains("STEP 3"));
        assert_eq!(sent.inline_count(), 2);
    }
    Ok(())
}

#[tokio::test]
async fn test_brand_guidelines_follow_label_after_content() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_success(strategy_json(
        "linkedin",
        "editor",
    )));
    let brand = Attachment::from_bytes("brand.pdf", "application/pdf", b"%PDF".to_vec());
    let request = StrategyRequest::builder()
        .mode(Mode::Editor)
        .platform(Platform::LinkedIn)
        .attachments(vec![photo(), photo()])
        .brand_guidelines(Some(brand))
        .build()?;

    let sent = client.build_request(&request).await?;

    assert!(first_text(&sent.parts).contains(BRAND_DIRECTIVE));
    assert_eq!(sent.parts.len(), 5);
    assert!(sent.parts[1].is_inline());
    assert!(sent.parts[2].is_inline());
    assert_eq!(sent.parts[3].as_text(), Some(BRAND_GUIDELINES_LABEL));
    assert_eq!(
        sent.parts[4],
        RequestPart::InlineData {
            mime_type: "application/pdf".to_string(),
            data: "JVBERg==".to_string(),
        }
    );
    assert_eq!(client.driver().call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_competitor_mode_requests_insights() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_success(strategy_json(
        "instagram",
        "competitor_spy",
    )));
    let request = StrategyRequest::builder()
        .mode(Mode::CompetitorSpy)
        .attachments(vec![photo()])
        .build()?;

    let sent = client.build_request(&request).await?;
    assert!(first_text(&sent.parts).contains(COMPETITOR_DIRECTIVE));
    assert!(!first_text(&sent.parts).contains(BRAND_DIRECTIVE));
    Ok(())
}

//
// ─── INSTRUCTION CONTENT ────────────────────────────────────────────────────
//

#[tokio::test]
async fn test_filter_values_are_interpolated_verbatim() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_success("{}"));
    let cases = [
        TargetingFilters::default(),
        TargetingFilters::builder()
            .niche("home espresso")
            .geography("São Paulo")
            .target_audience("")
            .target_language("Portuguese")
            .target_demographics("25-34, urban")
            .build()?,
    ];

    for filters in cases {
        let request = StrategyRequest::builder()
            .attachments(vec![photo()])
            .filters(filters.clone())
            .build()?;
        let sent = client.build_request(&request).await?;
        let instruction = first_text(&sent.parts);

        assert!(instruction.contains(&format!("- Niche: {}\n", filters.niche())));
        assert!(instruction.contains(&format!("- Geography: {}\n", filters.geography())));
        assert!(instruction.contains(&format!(
            "- Target Audience: {}\n",
            filters.target_audience()
        )));
        assert!(instruction.contains(&format!("- Language: {}\n", filters.target_language())));
        assert!(instruction.contains(&format!(
            "- Demographics: {}\n",
            filters.target_demographics()
        )));
    }
    Ok(())
}

#[tokio::test]
async fn test_live_trend_directive_names_month_and_niche() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_success("{}"));
    let request = StrategyRequest::builder()
        .platform(Platform::YouTube)
        .filters(TargetingFilters::builder().niche("sourdough").build()?)
        .live_trends(true)
        .build()?;

    let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
    let sent = client.build_request_on(&request, today).await?;
    let instruction = first_text(&sent.parts);
    assert!(instruction.contains("Current viral trends October 2026"));
    assert!(instruction.contains("Trending audio for sourdough on youtube"));
    Ok(())
}

#[tokio::test]
async fn test_model_override_is_forwarded() -> anyhow::Result<()> {
    let client =
        StrategyClient::new(MockDriver::new_success(hunt_json(1))).with_model("gemini-2.5-pro");
    client.hunt_trends("chess").await?;

    let sent = client.driver().last_request().expect("request recorded");
    assert_eq!(sent.model.as_deref(), Some("gemini-2.5-pro"));
    Ok(())
}

//
// ─── RESPONSE HANDLING ──────────────────────────────────────────────────────
//

#[tokio::test]
async fn test_fenced_reply_is_unwrapped() -> anyhow::Result<()> {
    let fenced = format!("```json\n{}\n```", strategy_json("youtube", "creator"));
    let client = StrategyClient::new(MockDriver::new_success(fenced));
    let request = StrategyRequest::builder()
        .attachments(vec![photo()])
        .build()?;

    let fenced_result = client.generate_strategy(&request).await?;

    let plain = StrategyClient::new(MockDriver::new_success(strategy_json("youtube", "creator")));
    let plain_result = plain.generate_strategy(&request).await?;

    assert_eq!(fenced_result, plain_result);
    assert_eq!(fenced_result.platform, Platform::YouTube);
    Ok(())
}

#[tokio::test]
async fn test_prose_around_json_is_tolerated() -> anyhow::Result<()> {
    let reply = format!(
        "I searched the web and found a great trend.\n\n{}\n\nGood luck!",
        strategy_json("tiktok", "creator")
    );
    let client = StrategyClient::new(MockDriver::new_success(reply));
    let request = StrategyRequest::builder()
        .attachments(vec![photo()])
        .live_trends(true)
        .build()?;

    let result = client.generate_strategy(&request).await?;
    assert!(result.trend_detected());
    Ok(())
}

#[tokio::test]
async fn test_no_text_payload_is_empty_response() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_empty());
    let request = StrategyRequest::builder()
        .attachments(vec![photo()])
        .build()?;

    let err = client.generate_strategy(&request).await.unwrap_err();
    let strategy = err.as_strategy().expect("strategy error");
    assert_eq!(strategy.kind, StrategyErrorKind::EmptyResponse);
    assert_eq!(err.category(), ErrorCategory::Response);
    Ok(())
}

#[tokio::test]
async fn test_whitespace_reply_is_empty_response() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_success("  \n\t "));
    let err = client.hunt_trends("knitting").await.unwrap_err();
    assert_eq!(
        err.as_strategy().map(|s| s.kind.clone()),
        Some(StrategyErrorKind::EmptyResponse)
    );
    Ok(())
}

#[tokio::test]
async fn test_invalid_json_is_malformed() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_success(
        "Sorry, I could not analyze this video.",
    ));
    let request = StrategyRequest::builder()
        .attachments(vec![photo()])
        .build()?;

    let err = client.generate_strategy(&request).await.unwrap_err();
    let strategy = err.as_strategy().expect("strategy error");
    assert!(matches!(strategy.kind, StrategyErrorKind::MalformedJson(_)));
    assert!(strategy.kind.is_malformed());
    Ok(())
}

#[tokio::test]
async fn test_missing_required_field_is_schema_mismatch() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_success(
        r#"{"platform": "instagram", "mode": "creator", "caption": "hi"}"#,
    ));
    let request = StrategyRequest::builder()
        .attachments(vec![photo()])
        .build()?;

    let err = client.generate_strategy(&request).await.unwrap_err();
    let strategy = err.as_strategy().expect("strategy error");
    assert!(matches!(strategy.kind, StrategyErrorKind::SchemaMismatch(_)));
    Ok(())
}

#[tokio::test]
async fn test_echoed_labels_resolve_to_platform_and_mode() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_success(strategy_json(
        "Instagram Reels",
        "Creator",
    )));
    let request = StrategyRequest::builder()
        .mode(Mode::Creator)
        .platform(Platform::Instagram)
        .attachments(vec![photo()])
        .build()?;

    let result = client.generate_strategy(&request).await?;
    assert_eq!(result.platform, Platform::Instagram);
    assert_eq!(result.mode, Mode::Creator);
    Ok(())
}

#[tokio::test]
async fn test_unrecognized_echo_falls_back_to_request() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_success(strategy_json(
        "Threads", "viral",
    )));
    let request = StrategyRequest::builder()
        .mode(Mode::Editor)
        .platform(Platform::LinkedIn)
        .attachments(vec![photo()])
        .build()?;

    let result = client.generate_strategy(&request).await?;
    assert_eq!(result.platform, Platform::LinkedIn);
    assert_eq!(result.mode, Mode::Editor);
    Ok(())
}

#[tokio::test]
async fn test_missing_echo_falls_back_to_request() -> anyhow::Result<()> {
    let mut reply: serde_json::Value = serde_json::from_str(&strategy_json("x", "y"))?;
    if let Some(object) = reply.as_object_mut() {
        object.remove("platform");
        object.remove("mode");
    }
    let client = StrategyClient::new(MockDriver::new_success(reply.to_string()));
    let request = StrategyRequest::builder()
        .mode(Mode::CompetitorSpy)
        .platform(Platform::Facebook)
        .attachments(vec![photo()])
        .build()?;

    let result = client.generate_strategy(&request).await?;
    assert_eq!(result.platform, Platform::Facebook);
    assert_eq!(result.mode, Mode::CompetitorSpy);
    Ok(())
}

#[tokio::test]
async fn test_hunt_survives_citation_markers_and_unlisted_platforms() -> anyhow::Result<()> {
    let body = serde_json::json!({
        "trend_hunter_ideas": [
            {
                "idea_title": "Pantry swaps",
                "idea_description": "Swap one staple a day",
                "why_it_works": "Budget content is surging",
                "suggested_platforms": ["tiktok", "YouTube Shorts"]
            },
            {
                "idea_title": "Meal prep boards",
                "idea_description": "Pin a weekly plan",
                "why_it_works": "Evergreen saves",
                "suggested_platforms": ["Pinterest"]
            }
        ]
    });
    let reply = format!("[1] Based on my search of current trends:\n{body}\n[2] Sources below.");
    let client = StrategyClient::new(MockDriver::new_success(reply));

    let ideas = client.hunt_trends("vegan cooking").await?;
    assert_eq!(ideas.len(), 2);
    assert_eq!(ideas[0].suggested_platforms, vec!["tiktok", "YouTube Shorts"]);
    assert_eq!(ideas[1].suggested_platforms, vec!["Pinterest"]);
    Ok(())
}

#[tokio::test]
async fn test_transport_errors_pass_through() -> anyhow::Result<()> {
    let client = StrategyClient::new(MockDriver::new_error(GeminiErrorKind::HttpError {
        status_code: 429,
        message: "Resource has been exhausted".to_string(),
    }));

    let err = client.hunt_trends("fitness").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Transport);
    assert!(matches!(
        err.kind(),
        SocialSeoErrorKind::Gemini(g) if g.kind.is_quota_exceeded()
    ));
    assert_eq!(client.driver().call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_grounding_sources_are_kept() -> anyhow::Result<()> {
    let source = GroundingSource {
        title: Some("Google Trends".to_string()),
        uri: "https://trends.google.com/explore".to_string(),
    };
    let client = StrategyClient::new(
        MockDriver::new_success(hunt_json(2)).with_sources(vec![source.clone()]),
    );

    let grounded = client.hunt_trends_grounded("gardening").await?;
    assert_eq!(grounded.value.len(), 2);
    assert_eq!(grounded.sources, vec![source]);
    Ok(())
}

//
// ─── ATTACHMENTS ────────────────────────────────────────────────────────────
//

#[tokio::test]
async fn test_attachments_keep_submission_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("clip.mp4");
    std::fs::File::create(&path)?.write_all(b"video-bytes")?;

    let client = StrategyClient::new(MockDriver::new_success("{}"));
    let request = StrategyRequest::builder()
        .attachments(vec![
            Attachment::from_bytes("a.png", "image/png", b"a".to_vec()),
            Attachment::from_path_guessed(&path),
            Attachment::from_bytes("c.txt", "text/plain", b"c".to_vec()),
        ])
        .build()?;

    let sent = client.build_request(&request).await?;
    let mimes: Vec<_> = sent
        .parts
        .iter()
        .filter_map(|p| match p {
            RequestPart::InlineData { mime_type, .. } => Some(mime_type.as_str()),
            RequestPart::Text(_) => None,
        })
        .collect();
    assert_eq!(mimes, vec!["image/png", "video/mp4", "text/plain"]);
    Ok(())
}

#[tokio::test]
async fn test_unreadable_attachment_aborts_without_calling_driver() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.mov");

    let client = StrategyClient::new(MockDriver::new_success(strategy_json(
        "instagram",
        "creator",
    )));
    let request = StrategyRequest::builder()
        .attachments(vec![photo(), Attachment::from_path(&missing, "video/quicktime")])
        .build()?;

    let err = client.generate_strategy(&request).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Attachment);
    let attachment = err.as_attachment().expect("attachment error");
    assert!(attachment.kind.to_string().contains("missing.mov"));
    assert_eq!(client.driver().call_count(), 0);
    Ok(())
}
