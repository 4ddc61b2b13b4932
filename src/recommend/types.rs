use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Student profile as posted by the client.
///
/// Every field is optional and loosely typed. `None` means the key was absent,
/// while an explicit JSON `null` is kept as `Some(Value::Null)` so the prompt
/// can tell the two apart.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default, deserialize_with = "present")]
    pub group: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub marks_obj: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub computed_cutoff: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub interests: Option<Interests>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Interests {
    List(Vec<Value>),
    Single(Value),
}

/// Payload returned to the caller on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub ai_text: String,
    pub ai_json: Option<Value>,
}

impl RecommendationRequest {
    /// Parses a raw request body. An empty body is treated as `{}`.
    ///
    /// Only a JSON object supplies fields. `null` is rejected, and any other
    /// non-object value (array, string, number, bool) yields no fields at all.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body).map_err(Error::RequestBody)?;
        match value {
            Value::Object(_) | Value::Null => {
                serde_json::from_value(value).map_err(Error::RequestBody)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Looks up `score`, `max` or `formula` on the cutoff, if the cutoff is an object.
    pub fn cutoff_field(&self, name: &str) -> Option<&Value> {
        self.computed_cutoff
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|cutoff| cutoff.get(name))
    }
}

fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
