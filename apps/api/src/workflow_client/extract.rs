//! Text extraction from workflow responses.
//!
//! The response shape drifts between workflow versions, so extraction is a
//! prioritized list of path lookups. The first one that yields a non-empty
//! string wins.

use serde_json::Value;

/// JSON pointers tried against `outputs[0]` when the response carries an `outputs` array.
const OUTPUT_PATHS: &[&str] = &[
    "/outputs/0/results/message/text",
    "/outputs/0/results/text",
    "/outputs/0/message/text",
    "/outputs/0/text",
    "/message/text",
    "/text",
];

/// Returns the generated text, or `None` when no candidate path holds any.
pub fn extract_text(response: &Value) -> Option<&str> {
    match response.get("outputs").and_then(Value::as_array) {
        Some(outputs) if !outputs.is_empty() => first_non_empty(&outputs[0], OUTPUT_PATHS),
        _ => top_level_text(response),
    }
}

fn first_non_empty<'a>(value: &'a Value, paths: &[&str]) -> Option<&'a str> {
    paths
        .iter()
        .filter_map(|path| value.pointer(path).and_then(Value::as_str))
        .find(|text| !text.is_empty())
}

/// `message` may be a bare string or an object with `text`; `text` is the last resort.
fn top_level_text(response: &Value) -> Option<&str> {
    let message = match response.get("message") {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => other.get("text").and_then(Value::as_str),
        None => None,
    };

    message
        .filter(|s| !s.is_empty())
        .or_else(|| response.get("text").and_then(Value::as_str))
        .filter(|s| !s.is_empty())
}
