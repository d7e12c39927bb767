//! Free-text address decomposition
//!
//! Splits a single `Adresse` cell into the five GC address fields. The
//! postal code / commune / country part is a plain regex match over the raw
//! cell text: it matches the first 5-digit run followed by at least two more
//! whitespace-separated chunks, wherever that run sits in the string. An
//! address with an unrelated 5-digit number before the real postal code is
//! mis-split, and that behavior is kept as is.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::Value;

use super::truncate::truncate_str;

/// Tokens kept in `Adresse1` before overflowing into `Adresse2`
pub const ADDRESS_TOKEN_SPLIT: usize = 100;
pub const ADRESSE1_MAX_LENGTH: usize = 100;
pub const ADRESSE2_MAX_LENGTH: usize = 75;
pub const POSTAL_CODE_MAX_LENGTH: usize = 9;
pub const COMMUNE_MAX_LENGTH: usize = 55;

/// `$` also matches before a single trailing newline
static POSTAL_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{5})\s+(.*)\s+(.*)\n?\z").expect("postal code pattern is valid")
});

/// The five derived address fields, null when not found
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressParts {
    pub adresse1: Option<String>,
    pub adresse2: Option<String>,
    pub code_postal: Option<String>,
    pub commune: Option<String>,
    pub pays: Option<String>,
}

impl AddressParts {
    /// Fields in output column order
    pub fn into_values(self) -> [Value; 5] {
        [
            self.adresse1.into(),
            self.adresse2.into(),
            self.code_postal.into(),
            self.commune.into(),
            self.pays.into(),
        ]
    }
}

/// Split an address cell into its GC fields
///
/// Only text cells are split; null, numeric and blank cells give all nulls.
pub fn split_address(address: &Value) -> AddressParts {
    let Some(address) = address.as_str() else {
        return AddressParts::default();
    };
    if address.trim().is_empty() {
        return AddressParts::default();
    }

    let tokens: Vec<&str> = address.split_whitespace().collect();
    let head = tokens.len().min(ADDRESS_TOKEN_SPLIT);

    let adresse1 = tokens[..head].join(" ");
    let adresse2 = (tokens.len() > ADDRESS_TOKEN_SPLIT)
        .then(|| tokens[ADDRESS_TOKEN_SPLIT..].join(" "))
        .map(|overflow| truncate_str(&overflow, ADRESSE2_MAX_LENGTH).to_string());

    let mut parts = AddressParts {
        adresse1: Some(truncate_str(&adresse1, ADRESSE1_MAX_LENGTH).to_string()),
        adresse2,
        ..Default::default()
    };

    if let Some(caps) = POSTAL_TAIL.captures(address) {
        parts.code_postal = caps
            .get(1)
            .map(|m| truncate_str(m.as_str(), POSTAL_CODE_MAX_LENGTH).to_string());
        parts.commune = caps
            .get(2)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| truncate_str(s, COMMUNE_MAX_LENGTH).to_string());
        parts.pays = caps.get(3).map(|m| m.as_str().to_string());
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str) -> AddressParts {
        split_address(&Value::String(s.to_string()))
    }

    #[test]
    fn test_null_and_blank_give_nulls() {
        assert_eq!(split_address(&Value::Null), AddressParts::default());
        assert_eq!(split("   \t "), AddressParts::default());
        assert_eq!(split(""), AddressParts::default());
    }

    #[test]
    fn test_non_text_gives_nulls() {
        assert_eq!(split_address(&Value::Int(75001)), AddressParts::default());
    }

    #[test]
    fn test_full_address() {
        let parts = split("10 Rue de Paris 75001 Paris France");

        assert_eq!(parts.adresse1.as_deref(), Some("10 Rue de Paris 75001 Paris France"));
        assert_eq!(parts.adresse2, None);
        assert_eq!(parts.code_postal.as_deref(), Some("75001"));
        assert_eq!(parts.commune.as_deref(), Some("Paris"));
        assert_eq!(parts.pays.as_deref(), Some("France"));
    }

    #[test]
    fn test_commune_takes_all_but_last_chunk() {
        let parts = split("2 avenue Foch 93200 Saint Denis France");
        assert_eq!(parts.commune.as_deref(), Some("Saint Denis"));
        assert_eq!(parts.pays.as_deref(), Some("France"));
    }

    #[test]
    fn test_whitespace_collapsed_in_adresse1() {
        let parts = split("  1   rue   Haute  ");
        assert_eq!(parts.adresse1.as_deref(), Some("1 rue Haute"));
    }

    #[test]
    fn test_no_postal_code() {
        let parts = split("Lieu-dit Les Granges");
        assert!(parts.adresse1.is_some());
        assert_eq!(parts.code_postal, None);
        assert_eq!(parts.commune, None);
        assert_eq!(parts.pays, None);
    }

    #[test]
    fn test_postal_code_needs_two_chunks_after() {
        assert_eq!(split("1 rue Haute 75001 Paris").code_postal, None);
    }

    #[test]
    fn test_mid_string_digits_match_first() {
        // a 5-digit street number is taken as the postal code
        let parts = split("12345 route nationale 69000 Lyon France");
        assert_eq!(parts.code_postal.as_deref(), Some("12345"));
        assert_eq!(parts.commune.as_deref(), Some("route nationale 69000 Lyon"));
        assert_eq!(parts.pays.as_deref(), Some("France"));
    }

    #[test]
    fn test_empty_commune_is_null() {
        let parts = split("75001  France");
        assert_eq!(parts.code_postal.as_deref(), Some("75001"));
        assert_eq!(parts.commune, None);
        assert_eq!(parts.pays.as_deref(), Some("France"));
    }

    #[test]
    fn test_trailing_newline() {
        // the newline itself is the last separator, leaving an empty country
        let parts = split("3 place Bellecour 69002 Lyon France\n");
        assert_eq!(parts.adresse1.as_deref(), Some("3 place Bellecour 69002 Lyon France"));
        assert_eq!(parts.commune.as_deref(), Some("Lyon France"));
        assert_eq!(parts.pays.as_deref(), Some(""));
    }

    #[test]
    fn test_hundred_tokens_fit_in_adresse1() {
        let address = vec!["a"; 100].join(" ");
        let parts = split(&address);
        assert_eq!(parts.adresse2, None);
        assert_eq!(parts.adresse1.unwrap().chars().count(), 100);
    }

    #[test]
    fn test_overflow_token_goes_to_adresse2() {
        let mut tokens: Vec<String> = (0..100).map(|i| format!("t{}", i)).collect();
        tokens.push("dernier".to_string());
        let parts = split(&tokens.join(" "));

        assert_eq!(parts.adresse2.as_deref(), Some("dernier"));
        assert_eq!(parts.adresse1.unwrap().chars().count(), ADRESSE1_MAX_LENGTH);
    }

    #[test]
    fn test_adresse2_truncated() {
        let tokens = vec!["mot"; 150].join(" ");
        let parts = split(&tokens);
        assert_eq!(parts.adresse2.unwrap().chars().count(), ADRESSE2_MAX_LENGTH);
    }

    #[test]
    fn test_commune_truncated() {
        let commune = "x".repeat(80);
        let parts = split(&format!("75001 {} France", commune));
        assert_eq!(parts.commune.unwrap().len(), COMMUNE_MAX_LENGTH);
    }
}
