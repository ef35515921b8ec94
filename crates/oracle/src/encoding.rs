//! Predicates for strings that hold encoded data

use lazy_static::lazy_static;
use regex::Regex;
use typeoracle_runtime::prelude::*;

lazy_static! {
    // Digit classes are spelled out, `\d` in the regex crate matches any Unicode digit
    static ref BASE64: Regex =
        Regex::new(r"^([A-Za-z0-9+/]{4})*([A-Za-z0-9+/]{4}|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{2}==)$")
            .expect("valid base64 pattern");
    static ref HEX: Regex = Regex::new(r"^[A-Fa-f0-9]+$").expect("valid hex pattern");
}

/// Returns true if the value is a base64 encoded string
///
/// The empty string is valid base64, otherwise the string must consist of complete 4 character
/// groups, with the final group optionally padded with `=`.
pub fn base64(value: &Value) -> bool {
    matches_encoding(value, &BASE64)
}

/// Returns true if the value is a string containing only hexadecimal digits
///
/// The empty string is considered to be valid.
pub fn hex(value: &Value) -> bool {
    matches_encoding(value, &HEX)
}

fn matches_encoding(value: &Value, pattern: &Regex) -> bool {
    value
        .as_string()
        .is_some_and(|s| s.is_empty() || pattern.is_match(&s))
}
