//! Prompt rendering for the career-counselor request.
//!
//! Field values are coerced to text the same way the existing web client's
//! template literals do, so prompts stay byte-for-byte stable across the port.
//! That includes rendering missing fields as `undefined`.

use super::types::{Interests, RecommendationRequest};
use serde_json::{Number, Value};

const UNDEFINED: &str = "undefined";

pub fn build_prompt(request: &RecommendationRequest) -> String {
    let group = interpolate(request.group.as_ref());
    let marks = request
        .marks_obj
        .as_ref()
        .map_or_else(|| UNDEFINED.to_string(), stringify);
    let score = interpolate(request.cutoff_field("score"));
    let max = interpolate(request.cutoff_field("max"));
    let formula = interpolate(request.cutoff_field("formula"));
    let interests = match &request.interests {
        Some(Interests::List(items)) => join(items, ", "),
        Some(Interests::Single(value)) => coerce(value),
        None => UNDEFINED.to_string(),
    };

    format!(
        r#"
You are an expert Indian career counselor.
Student data:
- Group: {group}
- Marks: {marks}
- Computed cutoff: {score} / {max} ({formula})
- Interests: {interests}

Task: Return EXACTLY a JSON object with keys:
{{
  "suggestions": [
    {{ "course": "...", "reason": "...", "entrance": "...", "colleges": ["top example", "accessible example"], "next_steps": "..." }}
  ],
  "confidence": 0.0,
  "notes": "..."
}}

Give 4-6 suggestion objects. Use 'approx' for cutoffs. Keep each field concise. Do not output extra commentary outside the JSON.
"#
    )
}

fn interpolate(value: Option<&Value>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), coerce)
}

fn coerce(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => join(items, ","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Array join: nulls become empty strings.
fn join(items: &[Value], separator: &str) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            other => coerce(other),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Compact JSON with integral floats written as integers.
fn stringify(value: &Value) -> String {
    integral_floats_as_ints(value).to_string()
}

fn integral_floats_as_ints(value: &Value) -> Value {
    match value {
        Value::Number(n) => match integral(n) {
            Some(i) => Value::from(i),
            None => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(integral_floats_as_ints).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), integral_floats_as_ints(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn integral(n: &Number) -> Option<i64> {
    n.as_f64()
        .filter(|f| n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15)
        .map(|f| f as i64)
}

// 190.0 renders as "190"
fn number_text(n: &Number) -> String {
    integral(n).map_or_else(|| n.to_string(), |i| i.to_string())
}
