//! vCard document assembly.

use chrono::{DateTime, Utc};
use rolodex_core::constants::{BEGIN_LINE, CRLF, END_LINE};

use super::emit::{
    Emitter, emit_addresses, emit_anniversary, emit_birthday, emit_emails, emit_gender,
    emit_links, emit_logo, emit_name, emit_nickname, emit_note, emit_organization,
    emit_organization_marker, emit_phones, emit_photo, emit_revision, emit_social_links,
    emit_source, emit_uid,
};
use super::fold::push_folded;
use crate::rfc::vcard::core::{Contact, MajorVersion};

/// Field emitters in output order, between VERSION and REV.
const EMITTERS: &[Emitter] = &[
    emit_name,
    emit_nickname,
    emit_gender,
    emit_uid,
    emit_birthday,
    emit_anniversary,
    emit_emails,
    emit_logo,
    emit_photo,
    emit_phones,
    emit_addresses,
    emit_organization,
    emit_links,
    emit_note,
    emit_social_links,
    emit_source,
];

/// Output knobs for [`serialize_with`].
#[derive(Debug, Clone, Default)]
pub struct SerializeOptions {
    /// Fold property lines longer than 75 octets.
    pub fold_lines: bool,
    /// Timestamp written on the REV line. Defaults to the current time.
    pub revised_at: Option<DateTime<Utc>>,
}

/// Serializes a contact as a single vCard document.
///
/// ## Summary
/// Every property line ends with CRLF. `version` selects the dialect of each
/// property; the VERSION line repeats [`Contact::version`] as given.
#[must_use]
pub fn serialize(contact: &Contact, version: MajorVersion) -> String {
    serialize_with(contact, version, &SerializeOptions::default())
}

/// Serializes a contact with explicit output options.
#[must_use]
#[tracing::instrument(skip_all, fields(version = %version, fold = options.fold_lines))]
pub fn serialize_with(
    contact: &Contact,
    version: MajorVersion,
    options: &SerializeOptions,
) -> String {
    let mut lines = vec![BEGIN_LINE.to_string(), format!("VERSION:{}", contact.version)];

    for emit in EMITTERS {
        emit(contact, version, &mut lines);
    }

    emit_revision(options.revised_at.unwrap_or_else(Utc::now), &mut lines);
    emit_organization_marker(contact, &mut lines);
    lines.push(END_LINE.to_string());

    tracing::debug!(lines = lines.len(), "Serialized vCard");

    let mut output = String::with_capacity(lines.iter().map(|l| l.len() + CRLF.len()).sum());
    for line in &lines {
        if options.fold_lines {
            push_folded(line, &mut output);
        } else {
            output.push_str(line);
        }
        output.push_str(CRLF);
    }

    output
}
