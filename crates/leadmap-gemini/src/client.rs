//! HTTP client for the Gemini REST API.
//!
//! Wraps `reqwest` with API key handling, the Maps grounding tool, and typed
//! decoding of Google's success and error envelopes. One call is one request:
//! there is no retry and no pagination.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeminiError;
use crate::types::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for `models/{model}:generateContent`.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a new client pointed at Google's production API.
    ///
    /// `timeout_secs` of `None` leaves the request timeout to `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        model: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::InvalidBaseUrl`] if
    /// `base_url` does not form a valid endpoint URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: Option<u64>,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent("leadmap/0.1 (lead-extraction)");
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let endpoint = Self::endpoint_url(base_url, model)?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            endpoint,
        })
    }

    /// Sends `prompt` as a single user turn with Maps grounding enabled and
    /// returns the reply text.
    ///
    /// An empty string means the model answered without text (for example a
    /// blocked prompt); that is not treated as an error.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Http`] on network failure.
    /// - [`GeminiError::Api`] on a non-2xx status, carrying Google's error
    ///   message when the body has one.
    /// - [`GeminiError::Deserialize`] if a 2xx body is not the expected shape.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::with_maps_grounding(prompt);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = Self::api_error_message(&body)
                .unwrap_or_else(|| format!("model request failed with HTTP {status}"));
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Deserialize {
                context: format!("generateContent(model={})", self.model),
                source: e,
            })?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            tracing::warn!(model = %self.model, reason, "prompt blocked by model");
        }

        let text = parsed.text();
        tracing::debug!(model = %self.model, chars = text.len(), "model reply received");
        Ok(text)
    }

    fn endpoint_url(base_url: &str, model: &str) -> Result<Url, GeminiError> {
        let raw = format!(
            "{}/v1beta/models/{model}:generateContent",
            base_url.trim_end_matches('/')
        );
        Url::parse(&raw).map_err(|e| GeminiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })
    }

    /// Pulls `error.message` out of Google's error envelope, if present.
    fn api_error_message(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorEnvelope>(body)
            .ok()
            .map(|envelope| envelope.error.message)
            .filter(|m| !m.is_empty())
    }
}
