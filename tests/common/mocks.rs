use async_trait::async_trait;
use course_recommender::{
    Error, Result,
    gemini::{GenerateContentRequest, GenerativeClient},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// A request as seen by the mock, with the API key it was sent under
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub api_key: String,
    pub request: GenerateContentRequest,
}

/// Mock generative client for testing
#[derive(Debug, Clone)]
pub struct MockGenerativeClient {
    pub responses: Arc<Mutex<Vec<Value>>>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub error: Option<String>,
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<Value>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    /// Makes every call fail as if upstream answered 502 with this non-JSON body
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key: api_key.to_string(),
            request: request.clone(),
        });

        if let Some(ref error) = self.error {
            return Err(non_json_body(502, error));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(non_json_body(500, "No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

fn non_json_body(status: u16, body: &str) -> Error {
    let source = serde_json::from_str::<Value>(body)
        .expect_err("mock error bodies must not be valid JSON");
    Error::UpstreamBody { status, source }
}

impl Default for MockGenerativeClient {
    fn default() -> Self {
        Self::new()
    }
}
