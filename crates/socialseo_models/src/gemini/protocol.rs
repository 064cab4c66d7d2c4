//! JSON message types for the Gemini `generateContent` REST call.
//!
//! # Request shape
//!
//! ```json
//! {
//!   "contents": [{"role": "user", "parts": [{"text": "..."}, {"inlineData": {...}}]}],
//!   "systemInstruction": {"parts": [{"text": "..."}]},
//!   "tools": [{"googleSearch": {}}],
//!   "generationConfig": {"responseMimeType": "application/json"}
//! }
//! ```
//!
//! `tools` and `generationConfig.responseMimeType` are never sent together.

use serde::{Deserialize, Serialize};
use socialseo_core::{ContentRequest, ContentResponse, GroundingSource, RequestPart};

//
// ─── REQUEST ────────────────────────────────────────────────────────────────
//

/// Body of a `generateContent` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; always a single user turn here
    pub contents: Vec<Content>,

    /// System instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,

    /// Tools available to the model
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,

    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl From<&ContentRequest> for GenerateContentRequest {
    fn from(req: &ContentRequest) -> Self {
        let parts = req.parts.iter().map(Part::from).collect();

        let system_instruction = (!req.system_instruction.is_empty()).then(|| SystemInstruction {
            parts: vec![Part::text(&req.system_instruction)],
        });

        let tools = if req.config.search() {
            vec![Tool::google_search()]
        } else {
            Vec::new()
        };

        let generation_config = (req.config.strict_json() && !req.config.search()).then(|| {
            GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
            }
        });

        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            system_instruction,
            tools,
            generation_config,
        }
    }
}

/// A conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Role ("user", "model")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Content parts
    pub parts: Vec<Part>,
}

/// System instruction for the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInstruction {
    /// Instruction parts
    pub parts: Vec<Part>,
}

/// Content part (text or inline data).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content
    Text(TextPart),
    /// Inline data (images, video, documents)
    InlineData(InlineDataPart),
}

impl Part {
    /// Text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(TextPart { text: text.into() })
    }
}

impl From<&RequestPart> for Part {
    fn from(part: &RequestPart) -> Self {
        match part {
            RequestPart::Text(text) => Part::text(text.clone()),
            RequestPart::InlineData { mime_type, data } => Part::InlineData(InlineDataPart {
                inline_data: InlineData {
                    mime_type: mime_type.clone(),
                    data: data.clone(),
                },
            }),
        }
    }
}

/// Text content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPart {
    /// Text
    pub text: String,
}

/// Inline data content part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPart {
    /// Payload
    pub inline_data: InlineData,
}

/// Inline data with MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type (e.g., "image/png", "video/mp4")
    pub mime_type: String,
    /// Base64-encoded data
    pub data: String,
}

/// Tool declaration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Grounding with Google Search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

impl Tool {
    /// The Google Search grounding tool.
    pub fn google_search() -> Self {
        Self {
            google_search: Some(GoogleSearch {}),
        }
    }
}

/// Empty marker object for the search tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// Generation configuration parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Forces the reply format, e.g. "application/json"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

//
// ─── RESPONSE ───────────────────────────────────────────────────────────────
//

/// Reply to a `generateContent` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates; only the first is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Present when the prompt itself was rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Reason the prompt was blocked, if it was.
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
    }

    /// Concatenated non-thought text of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())?;

        let texts: Vec<&str> = parts
            .iter()
            .filter(|p| !p.thought.unwrap_or(false))
            .filter_map(|p| p.text.as_deref())
            .collect();

        (!texts.is_empty()).then(|| texts.concat())
    }

    /// Web sources from the first candidate's grounding metadata.
    pub fn sources(&self) -> Vec<GroundingSource> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|meta| {
                meta.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .filter_map(|web| {
                        web.uri.as_ref().map(|uri| GroundingSource {
                            title: web.title.clone(),
                            uri: uri.clone(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<GenerateContentResponse> for ContentResponse {
    fn from(response: GenerateContentResponse) -> Self {
        ContentResponse {
            text: response.text(),
            sources: response.sources(),
        }
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<CandidateContent>,

    /// Why generation stopped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,

    /// Search grounding information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Content of a candidate. Parts the driver does not understand are kept
/// as empty entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateContent {
    /// Reply parts
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// Reply part.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidatePart {
    /// Text, when this is a text part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Marks reasoning output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

/// Grounding metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Retrieved chunks
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,

    /// Queries the model issued
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_search_queries: Vec<String>,
}

/// A retrieved chunk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroundingChunk {
    /// Web page source
    #[serde(default)]
    pub web: Option<WebChunk>,
}

/// Web page reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebChunk {
    /// Page URI
    #[serde(default)]
    pub uri: Option<String>,
    /// Page title
    #[serde(default)]
    pub title: Option<String>,
}

/// Prompt rejection details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason, e.g. "SAFETY"
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    /// Error body
    pub error: ApiErrorBody,
}

/// Error body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// HTTP-like code
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Canonical status, e.g. "PERMISSION_DENIED"
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use socialseo_core::RequestConfig;

    fn request(config: RequestConfig) -> ContentRequest {
        ContentRequest {
            model: None,
            system_instruction: "Be useful".to_string(),
            parts: vec![
                RequestPart::Text("Analyze".to_string()),
                RequestPart::InlineData {
                    mime_type: "image/png".to_string(),
                    data: "aGk=".to_string(),
                },
            ],
            config,
        }
    }

    #[test]
    fn strict_json_request_sets_mime_type_without_tools() {
        let body = serde_json::to_value(GenerateContentRequest::from(&request(
            RequestConfig::strict_json_only(),
        )))
        .unwrap();

        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(body.get("tools").is_none());
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be useful");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Analyze");
        assert_eq!(
            body["contents"][0]["parts"][1],
            json!({"inlineData": {"mimeType": "image/png", "data": "aGk="}})
        );
    }

    #[test]
    fn search_request_sends_tool_without_mime_type() {
        let body = serde_json::to_value(GenerateContentRequest::from(&request(
            RequestConfig::with_search(),
        )))
        .unwrap();

        assert_eq!(body["tools"], json!([{"googleSearch": {}}]));
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn response_text_skips_thoughts_and_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [
                    {"text": "thinking...", "thought": true},
                    {"text": "{\"a\":"},
                    {"text": " 1}"}
                ]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("{\"a\": 1}"));
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();

        assert!(response.text().is_none());
        assert_eq!(response.block_reason(), Some("SAFETY"));
    }

    #[test]
    fn grounding_sources_are_extracted() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"parts": [{"text": "ok"}]},
                "groundingMetadata": {
                    "webSearchQueries": ["vegan trends"],
                    "groundingChunks": [
                        {"web": {"uri": "https://trends.example/a", "title": "Trends"}},
                        {"web": {"title": "no uri"}},
                        {}
                    ]
                }
            }]
        }))
        .unwrap();

        let content: ContentResponse = response.into();
        assert_eq!(content.sources.len(), 1);
        assert_eq!(content.sources[0].uri, "https://trends.example/a");
        assert_eq!(content.sources[0].title.as_deref(), Some("Trends"));
    }
}
