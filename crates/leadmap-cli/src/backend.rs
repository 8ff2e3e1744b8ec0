//! HTTP client for the lead backend's `GET /api/fetchLeads` endpoint.

use std::time::Duration;

use leadmap_core::Lead;
use reqwest::{Client, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the backend's `error` field when it sent
    /// one.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Client for one backend instance. No request timeout is set: model calls
/// behind the endpoint can legitimately take a long time.
pub struct BackendClient {
    client: Client,
    endpoint: Url,
}

impl BackendClient {
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidUrl`] if `base_url` is not a valid URL,
    /// or [`BackendError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent("leadmap-cli/0.1")
            .build()?;

        let raw = format!("{}/api/fetchLeads", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&raw).map_err(|e| BackendError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, endpoint })
    }

    /// Fetches the leads the backend extracted for `segment` in `city`.
    ///
    /// # Errors
    ///
    /// - [`BackendError::Http`] on network failure.
    /// - [`BackendError::Status`] on a non-2xx status.
    /// - [`BackendError::Deserialize`] if a 2xx body is not a lead array.
    pub async fn fetch_leads(&self, segment: &str, city: &str) -> Result<Vec<Lead>, BackendError> {
        let url = self.request_url(segment, city);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| format!("request failed: {status}"));
            tracing::error!(%city, status = status.as_u16(), %message, "backend request failed");
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let leads: Vec<Lead> =
            serde_json::from_str(&body).map_err(|e| BackendError::Deserialize {
                context: format!("fetchLeads(city={city})"),
                source: e,
            })?;

        tracing::debug!(%city, count = leads.len(), "backend returned leads");
        Ok(leads)
    }

    fn request_url(&self, segment: &str, city: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("segment", segment)
            .append_pair("city", city);
        url
    }
}

/// Reads the `error` field of a `{ "error": "..." }` body.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .filter(|m| !m.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
