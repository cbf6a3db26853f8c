//! Postal address types.

use serde::{Deserialize, Serialize};

use super::scalar::Scalar;

/// Address type used for entries in `otherAddresses` that do not name one.
pub const DEFAULT_ADDRESS_TYPE: &str = "OTHER";

/// A postal address block (ADR property).
///
/// All components are free text. A component may be numeric when the record
/// came from JSON (postal codes often are).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    /// Formatted label text for the whole address.
    pub label: Option<Scalar>,
    pub street: Option<Scalar>,
    /// Locality.
    pub city: Option<Scalar>,
    /// Region.
    pub state_province: Option<Scalar>,
    pub postal_code: Option<Scalar>,
    pub country_region: Option<Scalar>,
}

impl Address {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label if it renders as text.
    #[must_use]
    pub fn present_label(&self) -> Option<&Scalar> {
        self.label.as_ref().filter(|label| !label.is_blank())
    }

    /// Returns whether no component (label included) renders as text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.label,
            &self.street,
            &self.city,
            &self.state_province,
            &self.postal_code,
            &self.country_region,
        ]
        .into_iter()
        .all(|component| component.as_ref().is_none_or(Scalar::is_blank))
    }
}

/// An address carrying its own type, as listed in `otherAddresses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypedAddress {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub address: Address,
}

impl TypedAddress {
    #[must_use]
    pub fn new(kind: Option<String>, address: Address) -> Self {
        Self { kind, address }
    }

    /// Returns the address type, `OTHER` when none was given.
    #[must_use]
    pub fn kind_or_default(&self) -> &str {
        self.kind
            .as_deref()
            .filter(|kind| !kind.is_empty())
            .unwrap_or(DEFAULT_ADDRESS_TYPE)
    }
}
