//! Gemini `generateContent` client over reqwest.

use async_trait::async_trait;
use reqwest::Client;
use socialseo_core::{ApiKey, ContentRequest, ContentResponse};
use socialseo_error::{GeminiError, GeminiErrorKind, SocialSeoResult};
use socialseo_interface::GenerativeDriver;
use tracing::{debug, error, info, instrument, warn};

use super::GeminiConfig;
use super::protocol::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// Client for the Google Gemini REST API.
///
/// The credential is an explicit value handed over at construction. An empty
/// key is accepted so that callers can report a missing credential before
/// any request is attempted; [`has_credential`](GenerativeDriver::has_credential)
/// reports it.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: ApiKey,
    model_name: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Client with the default model and endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(api_key: impl Into<ApiKey>) -> SocialSeoResult<Self> {
        Self::from_config(&GeminiConfig::default(), api_key)
    }

    /// Client using the model and endpoint from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn from_config(config: &GeminiConfig, api_key: impl Into<ApiKey>) -> SocialSeoResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("socialseo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build HTTP client");
                GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string()))
            })?;

        let client = Self {
            http,
            api_key: api_key.into(),
            model_name: normalize_model(config.model()).to_string(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
        };

        debug!(
            model = %client.model_name,
            base_url = %client.base_url,
            has_key = !client.api_key.is_empty(),
            "Created Gemini client"
        );
        Ok(client)
    }

    /// Client whose credential is resolved from configuration and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_config_env(config: &GeminiConfig) -> SocialSeoResult<Self> {
        Self::from_config(config, config.resolve_api_key())
    }

    /// Full `generateContent` URL for a model.
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url,
            normalize_model(model)
        )
    }
}

/// Accept both `gemini-2.5-flash` and `models/gemini-2.5-flash`.
fn normalize_model(model: &str) -> &str {
    model.strip_prefix("models/").unwrap_or(model)
}

#[async_trait]
impl GenerativeDriver for GeminiClient {
    #[instrument(
        name = "gemini_generate",
        skip(self, req),
        fields(
            model = %req.model.as_deref().unwrap_or(&self.model_name),
            parts = req.parts.len(),
            search = req.config.search(),
            strict_json = req.config.strict_json(),
        )
    )]
    async fn generate(&self, req: &ContentRequest) -> SocialSeoResult<ContentResponse> {
        if self.api_key.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into());
        }

        let model = req.model.as_deref().unwrap_or(&self.model_name);
        let url = self.endpoint(model);
        let body = GenerateContentRequest::from(req);

        debug!(url = %url, inline_parts = req.inline_count(), "Sending request to Gemini");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&response_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(response_text);
            error!(status = %status, error = %message, "Gemini API error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let decoded: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to decode Gemini response");
                GeminiError::new(GeminiErrorKind::ResponseDecode(e.to_string()))
            })?;

        if let Some(reason) = decoded.block_reason() {
            warn!(reason, "Prompt blocked");
            return Err(GeminiError::new(GeminiErrorKind::PromptBlocked(reason.to_string())).into());
        }

        let content = ContentResponse::from(decoded);
        info!(
            text_len = content.text.as_ref().map_or(0, String::len),
            sources = content.sources.len(),
            "Gemini response received"
        );
        Ok(content)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn has_credential(&self) -> bool {
        !self.api_key.is_empty()
    }
}
