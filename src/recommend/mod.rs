mod extract;
mod prompt;
mod types;

pub use extract::{extract_embedded_json, extract_text};
pub use prompt::build_prompt;
pub use types::*;

use crate::{
    Error, Result,
    config::GeminiConfig,
    gemini::{GenerateContentRequest, GenerativeClient},
};
use std::sync::Arc;
use tracing::debug;

/// Turns a posted student profile into a model recommendation.
///
/// Holds no per-request state; one instance serves all requests concurrently.
pub struct Recommender {
    client: Arc<dyn GenerativeClient>,
    api_key: Option<String>,
    temperature: f64,
    max_output_tokens: u32,
}

impl Recommender {
    pub fn new(client: Arc<dyn GenerativeClient>, config: &GeminiConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    pub async fn recommend(&self, body: &[u8]) -> Result<RecommendationResult> {
        // Checked before touching the body so no upstream call is made without a key
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        let request = RecommendationRequest::from_body(body)?;
        let prompt = build_prompt(&request);
        debug!(prompt_len = prompt.len(), "Built recommendation prompt");

        let upstream =
            GenerateContentRequest::user_prompt(prompt, self.temperature, self.max_output_tokens);
        let response = self.client.generate_content(api_key, &upstream).await?;

        let ai_text = extract_text(&response);
        let ai_json = extract_embedded_json(&ai_text);
        if ai_json.is_none() {
            debug!("Model output carried no parseable JSON object");
        }

        Ok(RecommendationResult { ai_text, ai_json })
    }
}
