//! Primitive property values.

use std::borrow::Cow;
use std::num::FpCategory;

use serde::{Deserialize, Serialize};

/// A primitive value placed into a property.
///
/// Records assembled from JSON may carry numbers where text is expected
/// (a postal code, a phone number). Those are kept as-is and rendered to
/// their canonical text when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Scalar {
    /// Returns whether the value renders as nothing.
    ///
    /// Empty text, zero, NaN and `false` are all blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Integer(i) => *i == 0,
            Self::Float(f) => matches!(f.classify(), FpCategory::Zero | FpCategory::Nan),
            Self::Boolean(b) => !b,
        }
    }

    /// Returns the canonical text form of the value.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Integer(i) => Cow::Owned(i.to_string()),
            Self::Float(f) if f.is_infinite() => {
                Cow::Borrowed(if f.is_sign_negative() { "-Infinity" } else { "Infinity" })
            }
            Self::Float(f) => Cow::Owned(f.to_string()),
            Self::Boolean(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
