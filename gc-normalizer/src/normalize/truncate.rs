//! Length capping for GC column limits

use crate::table::Value;

/// Cut `value` to at most `max_length` characters
///
/// Null passes through unchanged; anything else is coerced to text first, so
/// numbers and dates come out as strings.
pub fn truncate(value: &Value, max_length: usize) -> Value {
    match value.to_text() {
        Some(text) => Value::String(truncate_str(&text, max_length).to_string()),
        None => value.clone(),
    }
}

/// Longest prefix of `s` holding at most `max_chars` characters
pub fn truncate_str(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
