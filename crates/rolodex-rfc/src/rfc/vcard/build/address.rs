//! ADR / LABEL rendering.

use super::escape::escape_value;
use crate::rfc::vcard::core::{Address, MajorVersion};

/// Renders the property lines for one address.
///
/// Version 4 carries the label inline as a quoted `LABEL` parameter. Earlier
/// versions write it as a separate LABEL property ahead of the ADR line.
/// An address with no components produces no lines.
#[must_use]
pub fn format_address(address: &Address, kind: &str, version: MajorVersion) -> Vec<String> {
    if address.is_empty() {
        return Vec::new();
    }

    let cs = version.charset_suffix();
    let components = structured_components(address);
    let label = address.present_label();

    if version.is_at_least(4) {
        let label_param = label
            .map(|label| format!(";LABEL=\"{}\"", escape_value(Some(label))))
            .unwrap_or_default();
        return vec![format!("ADR{cs};TYPE={kind}{label_param}:{components}")];
    }

    let mut lines = Vec::with_capacity(2);
    if let Some(label) = label {
        lines.push(format!(
            "LABEL{cs};TYPE={kind}:{}",
            escape_value(Some(label))
        ));
    }
    lines.push(format!("ADR{cs};TYPE={kind}:{components}"));
    lines
}

/// PO box and extended address are always empty.
fn structured_components(address: &Address) -> String {
    [
        "",
        "",
        &escape_value(address.street.as_ref()),
        &escape_value(address.city.as_ref()),
        &escape_value(address.state_province.as_ref()),
        &escape_value(address.postal_code.as_ref()),
        &escape_value(address.country_region.as_ref()),
    ]
    .join(";")
}
