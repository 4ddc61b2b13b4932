use serde::{Deserialize, Serialize};

/// Body of a `generateContent` call.
///
/// Sampling settings sit at the top level next to `contents`, which is the
/// shape existing callers of this service have always sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// A single user turn carrying `prompt`.
    pub fn user_prompt(
        prompt: impl Into<String>,
        temperature: f64,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
            temperature,
            max_output_tokens,
        }
    }
}
