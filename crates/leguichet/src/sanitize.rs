//! Inbound intent sanitization

use serde_json::Value;

/// Longest intent, in characters, handed to the engine
pub const MAX_INTENT_LENGTH: usize = 512;

/// Coerce a request's `intent` field into an engine-ready string.
///
/// Anything that is not a JSON string becomes the empty intent. Strings are
/// trimmed, then cut to `max_len` characters.
pub fn sanitize_intent(value: Option<&Value>, max_len: usize) -> String {
    match value {
        Some(Value::String(intent)) => intent.trim().chars().take(max_len).collect(),
        _ => String::new(),
    }
}
