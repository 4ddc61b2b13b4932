use serde_json::Value;

const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Returns the first candidate's text, or the whole response pretty-printed
/// when that path is missing or empty.
pub fn extract_text(response: &Value) -> String {
    response
        .pointer(TEXT_POINTER)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| {
            serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string())
        })
}

/// Parses the span between the first `{` and the last `}` of `text`.
///
/// Returns `None` when either brace is missing, they are out of order, or the
/// span is not valid JSON.
pub fn extract_embedded_json(text: &str) -> Option<Value> {
    let first = text.find('{')?;
    let last = text.rfind('}')?;
    if last <= first {
        return None;
    }

    serde_json::from_str(&text[first..=last]).ok()
}
