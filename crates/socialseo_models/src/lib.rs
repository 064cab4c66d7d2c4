//! Gemini driver for SocialSEO.
//!
//! [`GeminiClient`] implements [`socialseo_interface::GenerativeDriver`] by
//! calling the Gemini `generateContent` REST endpoint directly. Multimodal
//! inline data, the Google Search tool and strict JSON output are all
//! expressed on the wire by [`protocol`] types.
//!
//! ```no_run
//! use socialseo_core::{ContentRequest, RequestConfig, RequestPart};
//! use socialseo_interface::GenerativeDriver;
//! use socialseo_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new("my-api-key")?;
//! let request = ContentRequest {
//!     model: None,
//!     system_instruction: "Reply with JSON.".to_string(),
//!     parts: vec![RequestPart::Text("Say hello".to_string())],
//!     config: RequestConfig::strict_json_only(),
//! };
//! let response = client.generate(&request).await?;
//! println!("{:?}", response.text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, FALLBACK_API_KEY_ENV, GeminiClient, GeminiConfig, protocol,
};
