use super::mocks::MockGenerativeClient;
use axum::{Router, body::Body, http::Response};
use course_recommender::{
    Result,
    config::GeminiConfig,
    recommend::Recommender,
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const TEST_API_KEY: &str = "test-api-key";

/// Default Gemini settings with a test key
pub fn create_test_gemini_config() -> GeminiConfig {
    GeminiConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        ..GeminiConfig::default()
    }
}

pub fn create_recommender(mock: &MockGenerativeClient, api_key: Option<&str>) -> Recommender {
    let config = GeminiConfig {
        api_key: api_key.map(str::to_string),
        ..create_test_gemini_config()
    };
    Recommender::new(Arc::new(mock.clone()), &config)
}

/// Router wired to the mock client
pub fn create_test_app(mock: &MockGenerativeClient, api_key: Option<&str>) -> Router {
    server::router(AppState {
        recommender: Arc::new(create_recommender(mock, api_key)),
    })
}

/// A successful `generateContent` body whose first part carries `text`
pub fn gemini_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": { "promptTokenCount": 210, "candidatesTokenCount": 180 }
    })
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

pub const SAMPLE_RECOMMENDATION: &str = r#"{
  "suggestions": [
    { "course": "B.E. Computer Science", "reason": "Strong maths", "entrance": "TNEA", "colleges": ["CEG Anna University", "PSG Tech"], "next_steps": "Apply in counselling round 1" }
  ],
  "confidence": 0.82,
  "notes": "Cutoffs are approx"
}"#;

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 3000
  logs:
    level: "debug"
gemini:
  base_url: "http://localhost:9999/v1beta"
  model: "gemini-2.0-flash"
  api_key: "yaml-key"
  temperature: 0.4
  max_output_tokens: 1024
"#;
