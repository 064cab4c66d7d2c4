//! Wire-neutral request and response types.

use serde::{Deserialize, Serialize};

/// One part of the user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestPart {
    /// Instruction or label text
    Text(String),
    /// Base64 payload paired with its media type
    InlineData {
        /// Declared media type
        mime_type: String,
        /// Base64-encoded bytes
        data: String,
    },
}

impl RequestPart {
    /// Text content, if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RequestPart::Text(text) => Some(text),
            RequestPart::InlineData { .. } => None,
        }
    }

    /// Whether this part carries inline data.
    pub fn is_inline(&self) -> bool {
        matches!(self, RequestPart::InlineData { .. })
    }
}

/// Transport settings for one request.
///
/// Search and strict JSON are mutually exclusive; the constructors are the
/// only way to build one, and search always wins.
///
/// # Examples
///
/// ```
/// use socialseo_core::RequestConfig;
///
/// let live = RequestConfig::for_live_trends(true);
/// assert!(live.search());
/// assert!(!live.strict_json());
///
/// let plain = RequestConfig::for_live_trends(false);
/// assert!(plain.strict_json());
/// assert!(!plain.search());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestConfig {
    search: bool,
    strict_json: bool,
}

impl RequestConfig {
    /// Strict JSON reply, no search tool.
    pub fn strict_json_only() -> Self {
        Self {
            search: false,
            strict_json: true,
        }
    }

    /// Search tool enabled, free-form reply.
    pub fn with_search() -> Self {
        Self {
            search: true,
            strict_json: false,
        }
    }

    /// Config for a strategy request with or without live-trend augmentation.
    pub fn for_live_trends(live_trends: bool) -> Self {
        if live_trends {
            Self::with_search()
        } else {
            Self::strict_json_only()
        }
    }

    /// Whether the search capability is enabled.
    pub fn search(&self) -> bool {
        self.search
    }

    /// Whether a raw JSON reply is forced.
    pub fn strict_json(&self) -> bool {
        self.strict_json
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self::strict_json_only()
    }
}

/// A fully built request, independent of any provider's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRequest {
    /// Model override; the driver's configured model is used when `None`
    pub model: Option<String>,
    /// Fixed system instruction
    pub system_instruction: String,
    /// Ordered parts of the single user turn
    pub parts: Vec<RequestPart>,
    /// Transport settings
    pub config: RequestConfig,
}

impl ContentRequest {
    /// Text of every text part, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(RequestPart::as_text)
    }

    /// Number of inline data parts.
    pub fn inline_count(&self) -> usize {
        self.parts.iter().filter(|p| p.is_inline()).count()
    }
}

/// A web source the service reports when search was used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroundingSource {
    /// Page title, when reported
    pub title: Option<String>,
    /// Source URI
    pub uri: String,
}

/// A reply from the service.
///
/// # Examples
///
/// ```
/// use socialseo_core::ContentResponse;
///
/// let response = ContentResponse::text("{\"ok\": true}");
/// assert_eq!(response.text.as_deref(), Some("{\"ok\": true}"));
/// assert!(response.sources.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResponse {
    /// Text payload, absent when the model produced none
    pub text: Option<String>,
    /// Grounding sources
    #[serde(default)]
    pub sources: Vec<GroundingSource>,
}

impl ContentResponse {
    /// Response carrying only text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            sources: Vec::new(),
        }
    }

    /// Text payload when it has any non-whitespace content.
    pub fn non_blank_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}
