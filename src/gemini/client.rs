use super::types::GenerateContentRequest;
use crate::{Error, Result, config::GeminiConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Sends one `generateContent` call and returns the upstream body as raw JSON.
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value>;
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            // No timeout: a hanging upstream runs until the caller gives up
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value> {
        debug!(
            model = %self.model,
            temperature = request.temperature,
            max_output_tokens = request.max_output_tokens,
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Error bodies are JSON too and get relayed through the text fallback
            warn!("Gemini API returned {}", status);
        }

        serde_json::from_str(&body).map_err(|source| Error::UpstreamBody {
            status: status.as_u16(),
            source,
        })
    }
}
