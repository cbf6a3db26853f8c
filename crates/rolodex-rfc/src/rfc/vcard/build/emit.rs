//! Per-field emission rules.
//!
//! Each emitter reads one category of the record and appends zero or more
//! property lines (without terminators). Emitters take the version as an
//! argument and never look at shared state, so the serializer can run them
//! in any context.

use chrono::{DateTime, SecondsFormat, Utc};

use super::address::format_address;
use super::date::format_date;
use super::escape::{escape_text, escape_value};
use super::media::format_media;
use crate::rfc::vcard::core::{Contact, Entry, MajorVersion, Media, OneOrMany, Scalar};

/// Signature shared by every field emitter.
pub(crate) type Emitter = fn(&Contact, MajorVersion, &mut Vec<String>);

/// Extension line marking a card as a company.
const ORGANIZATION_MARKER: &str = "X-ABShowAs:COMPANY";

/// Returns the entries of a multi-valued field.
///
/// A missing field and a single blank bare value both yield nothing.
fn entries(field: Option<&OneOrMany<Entry>>) -> &[Entry] {
    match field {
        Some(OneOrMany::One(entry)) if entry.is_blank() => &[],
        Some(field) => field.as_slice(),
        None => &[],
    }
}

/// Blank values (empty text, zero, `false`) are skipped like absent ones.
fn push_text(lines: &mut Vec<String>, name: &str, cs: &str, value: Option<&Scalar>) {
    if let Some(value) = value.filter(|v| !v.is_blank()) {
        lines.push(format!("{name}{cs}:{}", escape_value(Some(value))));
    }
}

// --- Identity ---

pub(crate) fn emit_name(contact: &Contact, version: MajorVersion, lines: &mut Vec<String>) {
    let cs = version.charset_suffix();

    lines.push(format!("FN{cs}:{}", escape_text(&contact.display_name())));
    lines.push(format!(
        "N{cs}:{};{};{};{};{}",
        escape_value(contact.last_name.as_ref()),
        escape_value(contact.first_name.as_ref()),
        escape_value(contact.middle_name.as_ref()),
        escape_value(contact.name_prefix.as_ref()),
        escape_value(contact.name_suffix.as_ref()),
    ));
}

/// NICKNAME only exists from version 3 on.
pub(crate) fn emit_nickname(contact: &Contact, version: MajorVersion, lines: &mut Vec<String>) {
    if version.is_at_least(3) {
        push_text(
            lines,
            "NICKNAME",
            version.charset_suffix(),
            contact.nickname.as_ref(),
        );
    }
}

pub(crate) fn emit_gender(contact: &Contact, _version: MajorVersion, lines: &mut Vec<String>) {
    push_text(lines, "GENDER", "", contact.gender.as_ref());
}

pub(crate) fn emit_uid(contact: &Contact, version: MajorVersion, lines: &mut Vec<String>) {
    push_text(lines, "UID", version.charset_suffix(), contact.uid.as_ref());
}

pub(crate) fn emit_birthday(contact: &Contact, _version: MajorVersion, lines: &mut Vec<String>) {
    if let Some(birthday) = &contact.birthday {
        lines.push(format!("BDAY:{}", format_date(birthday)));
    }
}

pub(crate) fn emit_anniversary(
    contact: &Contact,
    _version: MajorVersion,
    lines: &mut Vec<String>,
) {
    if let Some(anniversary) = &contact.anniversary {
        lines.push(format!("ANNIVERSARY:{}", format_date(anniversary)));
    }
}

// --- Electronic addresses ---

#[derive(Debug, Clone, Copy)]
enum EmailSlot {
    Primary,
    Work,
    Other,
}

impl EmailSlot {
    const ALL: [Self; 3] = [Self::Primary, Self::Work, Self::Other];

    fn field(self, contact: &Contact) -> Option<&OneOrMany<Entry>> {
        match self {
            Self::Primary => contact.email.as_ref(),
            Self::Work => contact.work_email.as_ref(),
            Self::Other => contact.other_email.as_ref(),
        }
    }

    const fn default_label(self) -> &'static str {
        match self {
            Self::Primary => "HOME",
            Self::Work => "WORK",
            Self::Other => "OTHER",
        }
    }

    /// Version 3 work addresses carry no INTERNET marker.
    const fn marks_internet(self) -> bool {
        !matches!(self, Self::Work)
    }
}

pub(crate) fn emit_emails(contact: &Contact, version: MajorVersion, lines: &mut Vec<String>) {
    let cs = version.charset_suffix();

    for slot in EmailSlot::ALL {
        for entry in entries(slot.field(contact)) {
            let label = entry.label_or(slot.default_label());
            let email = escape_value(Some(entry.value()));

            let line = if version.is_at_least(4) {
                format!("EMAIL{cs};type={label}:{email}")
            } else if version.is_at_least(3) {
                let marker = if slot.marks_internet() { ",INTERNET" } else { "" };
                format!("EMAIL{cs};type={label}{marker}:{email}")
            } else {
                format!("EMAIL{cs};{label};INTERNET:{email}")
            };
            lines.push(line);
        }
    }
}

// --- Media ---

fn push_media(lines: &mut Vec<String>, property: &str, media: &Media, version: MajorVersion) {
    if let Some(url) = media.present_url() {
        lines.push(format_media(
            property,
            url,
            media.media_type.as_deref().unwrap_or_default(),
            media.base64,
            version,
        ));
    }
}

pub(crate) fn emit_logo(contact: &Contact, version: MajorVersion, lines: &mut Vec<String>) {
    push_media(lines, "LOGO", &contact.logo, version);
}

pub(crate) fn emit_photo(contact: &Contact, version: MajorVersion, lines: &mut Vec<String>) {
    push_media(lines, "PHOTO", &contact.photo, version);
}

// --- Contact numbers ---

#[derive(Debug, Clone, Copy)]
enum PhoneSlot {
    Cell,
    Pager,
    Home,
    Work,
    HomeFax,
    WorkFax,
    Other,
}

impl PhoneSlot {
    const ALL: [Self; 7] = [
        Self::Cell,
        Self::Pager,
        Self::Home,
        Self::Work,
        Self::HomeFax,
        Self::WorkFax,
        Self::Other,
    ];

    fn field(self, contact: &Contact) -> Option<&OneOrMany<Entry>> {
        match self {
            Self::Cell => contact.cell_phone.as_ref(),
            Self::Pager => contact.pager_phone.as_ref(),
            Self::Home => contact.home_phone.as_ref(),
            Self::Work => contact.work_phone.as_ref(),
            Self::HomeFax => contact.home_fax.as_ref(),
            Self::WorkFax => contact.work_fax.as_ref(),
            Self::Other => contact.other_phone.as_ref(),
        }
    }

    /// Cell and pager lines use fixed types and ignore entry labels.
    const fn default_label(self) -> &'static str {
        match self {
            Self::Cell => "CELL",
            Self::Pager => "PAGER",
            Self::Home | Self::HomeFax => "home",
            Self::Work | Self::WorkFax => "work",
            Self::Other => "OTHER",
        }
    }

    /// Work voice numbers switch to the URI form only above version 4.
    fn uses_uri(self, version: MajorVersion) -> bool {
        match self {
            Self::Work => version.exceeds(4),
            _ => version.is_at_least(4),
        }
    }

    fn uri_line(self, label: &str, number: &str) -> String {
        match self {
            Self::Cell => format!("TEL;VALUE=uri;TYPE=\"voice,cell\":tel:{number}"),
            Self::Pager => format!("TEL;VALUE=uri;TYPE=\"pager,cell\":tel:{number}"),
            Self::Home | Self::Work | Self::Other => {
                format!("TEL;VALUE=uri;TYPE=\"voice,{label}\":tel:{number}")
            }
            // Home fax has no closing quote on the TYPE value. Kept as-is since
            // existing consumers may match on it.
            Self::HomeFax => format!("TEL;VALUE=uri;TYPE=\"fax,{label}:tel:{number}"),
            Self::WorkFax => format!("TEL;VALUE=uri;TYPE=\"fax,{label}\":tel:{number}"),
        }
    }

    fn legacy_line(self, label: &str, number: &str) -> String {
        match self {
            Self::Cell => format!("TEL;TYPE=CELL:{number}"),
            Self::Pager => format!("TEL;TYPE=PAGER:{number}"),
            Self::Home | Self::Work => format!("TEL;TYPE={label},VOICE:{number}"),
            Self::HomeFax | Self::WorkFax => format!("TEL;TYPE={label},FAX:{number}"),
            Self::Other => format!("TEL;TYPE={label}:{number}"),
        }
    }
}

pub(crate) fn emit_phones(contact: &Contact, version: MajorVersion, lines: &mut Vec<String>) {
    for slot in PhoneSlot::ALL {
        for entry in entries(slot.field(contact)) {
            let label = entry.label_or(slot.default_label());
            let number = escape_value(Some(entry.value()));

            lines.push(if slot.uses_uri(version) {
                slot.uri_line(label, &number)
            } else {
                slot.legacy_line(label, &number)
            });
        }
    }
}

// --- Locations ---

pub(crate) fn emit_addresses(contact: &Contact, version: MajorVersion, lines: &mut Vec<String>) {
    lines.extend(format_address(&contact.home_address, "HOME", version));
    lines.extend(format_address(&contact.work_address, "WORK", version));

    for other in &contact.other_addresses {
        lines.extend(format_address(
            &other.address,
            other.kind_or_default(),
            version,
        ));
    }
}

// --- Organization and free text ---

pub(crate) fn emit_organization(
    contact: &Contact,
    version: MajorVersion,
    lines: &mut Vec<String>,
) {
    let cs = version.charset_suffix();

    push_text(lines, "TITLE", cs, contact.title.as_ref());
    push_text(lines, "ROLE", cs, contact.role.as_ref());
    push_text(lines, "ORG", cs, contact.organization.as_ref());
}

pub(crate) fn emit_note(contact: &Contact, version: MajorVersion, lines: &mut Vec<String>) {
    push_text(lines, "NOTE", version.charset_suffix(), contact.note.as_ref());
}

pub(crate) fn emit_source(contact: &Contact, version: MajorVersion, lines: &mut Vec<String>) {
    push_text(
        lines,
        "SOURCE",
        version.charset_suffix(),
        contact.source.as_ref(),
    );
}

// --- Links ---

/// The charset suffix follows the `type` parameter for every version.
pub(crate) fn emit_links(contact: &Contact, version: MajorVersion, lines: &mut Vec<String>) {
    let cs = version.charset_suffix();

    for (field, default_label) in [
        (contact.url.as_ref(), "website"),
        (contact.work_url.as_ref(), "WORK"),
    ] {
        for entry in entries(field) {
            let label = entry.label_or(default_label);
            lines.push(format!(
                "URL;type={label}{cs}:{}",
                escape_value(Some(entry.value()))
            ));
        }
    }
}

/// Networks whose value is null, an empty string or an empty list are skipped.
pub(crate) fn emit_social_links(
    contact: &Contact,
    _version: MajorVersion,
    lines: &mut Vec<String>,
) {
    for (network, urls) in &contact.social_urls {
        let urls = match urls {
            None => continue,
            Some(OneOrMany::One(url)) if url.is_empty() => continue,
            Some(urls) => urls,
        };

        for url in urls {
            lines.push(format!("URL;TYPE={network}:{}", escape_text(url)));
        }
    }
}

// --- Trailer ---

/// REV in ISO-8601 UTC with millisecond precision.
pub(crate) fn emit_revision(revised_at: DateTime<Utc>, lines: &mut Vec<String>) {
    lines.push(format!(
        "REV:{}",
        revised_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
}

pub(crate) fn emit_organization_marker(contact: &Contact, lines: &mut Vec<String>) {
    if contact.is_organization {
        lines.push(ORGANIZATION_MARKER.to_string());
    }
}
