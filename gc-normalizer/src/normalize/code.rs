//! Client/supplier code rewriting

use crate::table::Value;

use super::truncate::truncate_str;

/// Maximum length of a GC account code
pub const CODE_MAX_LENGTH: usize = 7;

/// Strip the legacy prefix from an account code and cap it to 7 characters
///
/// A leading `0` or `9` loses its first character. Otherwise a `CLT` or
/// `FRS` prefix is removed together with one following `0`. Only one rule
/// applies per code.
pub fn transform_code(code: &Value) -> Value {
    let Some(text) = code.to_text() else {
        return code.clone();
    };

    let stripped = if text.starts_with('0') || text.starts_with('9') {
        &text[1..]
    } else if let Some(rest) = text
        .strip_prefix("CLT")
        .or_else(|| text.strip_prefix("FRS"))
    {
        rest.strip_prefix('0').unwrap_or(rest)
    } else {
        text.as_str()
    };

    Value::String(truncate_str(stripped, CODE_MAX_LENGTH).to_string())
}
