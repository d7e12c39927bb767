//! Cell value representation for contact tables

use chrono::NaiveDateTime;

/// A single spreadsheet cell, used for normalizer inputs and outputs
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/empty cell
    Null,
    /// Text cell
    String(String),
    /// Whole number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean cell
    Bool(bool),
    /// Date and time (spreadsheets carry no timezone)
    DateTime(NaiveDateTime),
}

impl Value {
    /// Check if this value is null (a NaN float counts as null)
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Text form of the value, `None` for null
    ///
    /// Integers print in decimal, booleans as `True`/`False` and date-times
    /// as `YYYY-MM-DD HH:MM:SS`, which is what GC received from the legacy
    /// export so truncation limits line up (e.g. `Date_Creation` at 10).
    pub fn to_text(&self) -> Option<String> {
        if self.is_null() {
            return None;
        }
        let text = match self {
            Value::Null => return None,
            Value::String(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format_float(*f),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        Some(text)
    }
}

fn format_float(f: f64) -> String {
    if f.is_infinite() {
        return if f > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_text() {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "(null)"),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Option<String>> for Value {
    fn from(s: Option<String>) -> Self {
        s.map(Value::String).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_null_has_no_text() {
        assert_eq!(Value::Null.to_text(), None);
        assert_eq!(Value::Float(f64::NAN).to_text(), None);
        assert!(Value::Float(f64::NAN).is_null());
    }

    #[test]
    fn test_scalar_text_forms() {
        assert_eq!(Value::Int(12345).to_text().as_deref(), Some("12345"));
        assert_eq!(Value::Float(1.5).to_text().as_deref(), Some("1.5"));
        assert_eq!(Value::Float(3.0).to_text().as_deref(), Some("3.0"));
        assert_eq!(Value::Bool(true).to_text().as_deref(), Some("True"));
        assert_eq!(Value::Bool(false).to_text().as_deref(), Some("False"));
    }

    #[test]
    fn test_datetime_text_form() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(
            Value::DateTime(dt).to_text().as_deref(),
            Some("2024-03-07 09:30:00")
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(Value::from(Some("x".to_string())), Value::String("x".into()));
    }
}
