//! Multi-valued field entries (phones, emails, links).

use serde::{Deserialize, Serialize};

use super::scalar::Scalar;

/// One element of a multi-valued field.
///
/// An entry is either a bare value or a value with its own label. The label
/// overrides the category default (e.g. `home` for a home phone).
///
/// In JSON the labeled form names its value after the field it belongs to:
/// `{"label": "...", "number": "..."}` for phones, `email` for electronic
/// addresses and `url` for links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Labeled {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, alias = "number", alias = "email", alias = "url")]
        value: Scalar,
    },
    Bare(Scalar),
}

impl Entry {
    #[must_use]
    pub fn bare(value: impl Into<Scalar>) -> Self {
        Self::Bare(value.into())
    }

    #[must_use]
    pub fn labeled(label: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self::Labeled {
            label: Some(label.into()),
            value: value.into(),
        }
    }

    /// Returns the entry's own label, if it has a non-empty one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Labeled { label, .. } => label.as_deref().filter(|l| !l.is_empty()),
            Self::Bare(_) => None,
        }
    }

    /// Returns the entry's label, falling back to the category default.
    #[must_use]
    pub fn label_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.label().unwrap_or(default)
    }

    #[must_use]
    pub fn value(&self) -> &Scalar {
        match self {
            Self::Labeled { value, .. } | Self::Bare(value) => value,
        }
    }

    /// Returns whether this is a bare value that renders as nothing.
    ///
    /// Labeled entries are never blank, even with an empty value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Bare(value) => value.is_blank(),
            Self::Labeled { .. } => false,
        }
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Self::bare(value)
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Self::bare(value)
    }
}

impl From<i64> for Entry {
    fn from(value: i64) -> Self {
        Self::bare(value)
    }
}

/// A field holding either a single value or an ordered sequence.
///
/// Both shapes are read through [`OneOrMany::as_slice`], so callers never
/// branch on which one they were given.
///
/// `Many` is tried first when deserializing: a JSON array is always a
/// sequence, never a single labeled entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Returns the values as an ordered slice; a single value is a one-element slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl From<Entry> for OneOrMany<Entry> {
    fn from(entry: Entry) -> Self {
        Self::One(entry)
    }
}

impl From<&str> for OneOrMany<Entry> {
    fn from(value: &str) -> Self {
        Self::One(Entry::from(value))
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_reads_as_one_element() {
        let field: OneOrMany<Entry> = OneOrMany::from("312-555-1212");
        assert_eq!(field.as_slice(), &[Entry::bare("312-555-1212")]);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn label_falls_back_to_default() {
        assert_eq!(Entry::bare("a@b").label_or("HOME"), "HOME");
        assert_eq!(Entry::labeled("", "a@b").label_or("HOME"), "HOME");
        assert_eq!(Entry::labeled("Custom", "a@b").label_or("HOME"), "Custom");
    }

    #[test]
    fn deserializes_mixed_phone_shapes() {
        let field: OneOrMany<Entry> = serde_json::from_str(
            r#"["312-555-1212", {"label": "CUSTOM WORK LABEL", "number": "312-555-1212"}]"#,
        )
        .expect("valid phone list");

        assert_eq!(
            field,
            OneOrMany::Many(vec![
                Entry::bare("312-555-1212"),
                Entry::labeled("CUSTOM WORK LABEL", "312-555-1212"),
            ])
        );
    }

    #[test]
    fn deserializes_labeled_email_and_url() {
        let email: Entry =
            serde_json::from_str(r#"{"email": "john.doe@testmail", "label": "Private"}"#)
                .expect("valid email entry");
        assert_eq!(email, Entry::labeled("Private", "john.doe@testmail"));

        let url: Entry = serde_json::from_str(r#"{"url": "http://johndoe"}"#).expect("valid url");
        assert_eq!(url.label(), None);
        assert_eq!(url.value(), &Scalar::from("http://johndoe"));
    }

    #[test]
    fn deserializes_plain_string_list() {
        let field: OneOrMany<Entry> =
            serde_json::from_str(r#"["a@example.com", "b@example.com"]"#).expect("valid list");
        assert_eq!(field.len(), 2);
        assert_eq!(field.as_slice()[1], Entry::bare("b@example.com"));
    }

    #[test]
    fn deserializes_numeric_phone() {
        let field: OneOrMany<Entry> = serde_json::from_str("12345678900").expect("valid number");
        assert_eq!(field.as_slice()[0].value().to_text(), "12345678900");
    }

    #[test]
    fn labeled_entry_without_value_reads_as_empty() {
        let entry: Entry = serde_json::from_str(r#"{"label": "X"}"#).expect("label-only entry");

        assert_eq!(entry, Entry::labeled("X", ""));
        assert_eq!(entry.value(), &Scalar::default());
        assert!(!entry.is_blank());
    }

    #[test]
    fn blank_only_for_bare_values() {
        assert!(Entry::bare("").is_blank());
        assert!(!Entry::labeled("x", "").is_blank());
    }
}
