//! vCard text escaping.

use crate::rfc::vcard::core::Scalar;

/// Escapes a text value for vCard serialization.
///
/// Escapes newline, comma, and semicolon. Backslashes and other characters
/// pass through unchanged.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            _ => result.push(c),
        }
    }

    result
}

/// Escapes an optional primitive value.
///
/// Absent and blank values (empty text, zero, `false`) produce an empty string.
/// Numbers are rendered to text first.
#[must_use]
pub fn escape_value(value: Option<&Scalar>) -> String {
    match value {
        Some(value) if !value.is_blank() => escape_text(&value.to_text()),
        _ => String::new(),
    }
}
