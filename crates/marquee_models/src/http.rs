//! JSON-over-HTTP generation client.

use crate::EndpointConfig;
use async_trait::async_trait;
use marquee_core::GeneratedCopy;
use marquee_error::{GenerationError, GenerationErrorKind, MarqueeResult};
use marquee_interface::TextGenerator;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    prompt: &'a str,
}

/// Client for a generation service speaking `POST /generate`.
///
/// Sends `{"prompt": ...}` and decodes `{"body", "hashtags", "imagePrompt",
/// "units"}`. Every failure surfaces as a [`GenerationError`].
#[derive(Debug, Clone)]
pub struct HttpTextGenerator {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpTextGenerator {
    /// Create a client for `endpoint` without a bearer token.
    pub fn new(endpoint: &EndpointConfig) -> Self {
        Self {
            client: Client::new(),
            url: endpoint.generate_url(),
            api_key: None,
        }
    }

    /// Create a client reading the token from `endpoint.api_key_env`.
    #[instrument(skip_all, fields(url = %endpoint.generate_url()))]
    pub fn from_env(endpoint: &EndpointConfig) -> Self {
        let api_key = endpoint.api_key();
        if api_key.is_none() {
            debug!(var = %endpoint.api_key_env(), "No API key set, sending unauthenticated");
        }
        Self::new(endpoint).with_api_key(api_key)
    }

    /// Set or clear the bearer token.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// URL the client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    #[instrument(skip(self, prompt), fields(url = %self.url, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> MarqueeResult<GeneratedCopy> {
        let mut request = self.client.post(&self.url).json(&GenerateBody { prompt });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::Transport(format!(
                "Request failed: {}",
                e
            )))
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            debug!(status, "Generation service rejected request");
            return Err(GenerationError::new(GenerationErrorKind::Status { status, message }).into());
        }

        let text = response.text().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::Transport(format!(
                "Failed to read response: {}",
                e
            )))
        })?;
        let copy: GeneratedCopy = serde_json::from_str(&text).map_err(|e| {
            GenerationError::new(GenerationErrorKind::Decode(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(
            body_len = copy.body.len(),
            hashtags = copy.hashtags.len(),
            units = copy.units.len(),
            "Decoded generation response"
        );
        Ok(copy)
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
