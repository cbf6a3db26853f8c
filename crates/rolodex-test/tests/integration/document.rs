#![allow(clippy::expect_used)]
//! Whole-document output for a JSON record.

use rolodex_test::vcard::{Contact, MajorVersion, serialize_with};
use rolodex_test::{JOHN_DOE_JSON, pinned_options, property_lines};

const JOHN_DOE_V3: &str = "BEGIN:VCARD\r\n\
    VERSION:3.0\r\n\
    FN;CHARSET=utf-8:John D Doe\r\n\
    N;CHARSET=utf-8:Doe;John;D;MR;JR\r\n\
    NICKNAME;CHARSET=utf-8:Test User\r\n\
    GENDER:M\r\n\
    UID;CHARSET=utf-8:69531f4a-c34d-4a1e-8922-bd38a9476a53\r\n\
    BDAY:20181201\r\n\
    ANNIVERSARY:20181201\r\n\
    EMAIL;CHARSET=utf-8;type=HOME,INTERNET:john.doe@testmail\r\n\
    EMAIL;CHARSET=utf-8;type=Custom Private Label,INTERNET:john.doe@testmail\r\n\
    EMAIL;CHARSET=utf-8;type=WORK:john.doe@workmail\r\n\
    LOGO;TYPE=png:https://testurl\r\n\
    PHOTO;TYPE=png:https://testurl\r\n\
    TEL;TYPE=CELL:12345678900\r\n\
    TEL;TYPE=home,VOICE:312-555-1313\r\n\
    TEL;TYPE=work,VOICE:312-555-1212\r\n\
    TEL;TYPE=CUSTOM WORK LABEL,VOICE:312-555-1212\r\n\
    TEL;TYPE=home,FAX:312-555-1616\r\n\
    TEL;TYPE=CUSTOM LABEL:312-555-1316\r\n\
    LABEL;CHARSET=utf-8;TYPE=HOME:Home Address\r\n\
    ADR;CHARSET=utf-8;TYPE=HOME:;;123 Main Street;Chicago;IL;12345;United States of America\r\n\
    ADR;CHARSET=utf-8;TYPE=OTHER:;;124 Main Street;Los Angeles;CA;;\r\n\
    ADR;CHARSET=utf-8;TYPE=WORK:;;123 Corporate Loop\\nSuite 502;;;;\r\n\
    TITLE;CHARSET=utf-8:Crash Test Dummy\r\n\
    ROLE;CHARSET=utf-8:Crash Testing\r\n\
    ORG;CHARSET=utf-8:ACME Corporation\r\n\
    URL;type=Custom URL Label;CHARSET=utf-8:http://johndoeeee\r\n\
    NOTE;CHARSET=utf-8:John Doe's \\nnotes\\;\\,\r\n\
    URL;TYPE=facebook:https://facebook/johndoe\r\n\
    URL;TYPE=tapni:https://t.link\r\n\
    URL;TYPE=tapni:https://t.link\r\n\
    SOURCE;CHARSET=utf-8:http://sourceurl\r\n\
    REV:2026-01-02T03:04:05.000Z\r\n\
    X-ABShowAs:COMPANY\r\n\
    END:VCARD\r\n";

fn john_doe() -> Contact {
    Contact::from_json(JOHN_DOE_JSON).expect("fixture record parses")
}

#[test_log::test]
fn json_record_serializes_to_expected_v3_document() {
    let contact = john_doe();
    let document = serialize_with(&contact, contact.major_version(), &pinned_options());

    assert_eq!(document, JOHN_DOE_V3);
}

#[test_log::test]
fn json_record_serializes_to_v4_dialect() {
    let mut contact = john_doe();
    contact.version = "4.0".to_string();

    let document = serialize_with(&contact, contact.major_version(), &pinned_options());
    let lines = property_lines(&document);

    assert!(lines.contains(&"EMAIL;type=WORK:john.doe@workmail"));
    assert!(lines.contains(&"PHOTO;MEDIATYPE=image/png:https://testurl"));
    assert!(lines.contains(&"TEL;VALUE=uri;TYPE=\"voice,cell\":tel:12345678900"));
    assert!(lines.contains(&"TEL;VALUE=uri;TYPE=\"voice,home\":tel:312-555-1313"));
    assert!(lines.contains(&"TEL;VALUE=uri;TYPE=\"fax,home:tel:312-555-1616"));
    assert!(lines.contains(&"TEL;VALUE=uri;TYPE=\"voice,CUSTOM LABEL\":tel:312-555-1316"));
    assert!(lines.contains(&"TEL;TYPE=CUSTOM WORK LABEL,VOICE:312-555-1212"));
    assert!(lines.contains(
        &"ADR;TYPE=HOME;LABEL=\"Home Address\":;;123 Main Street;Chicago;IL;12345;United States of America"
    ));
    assert!(lines.contains(&"URL;type=Custom URL Label:http://johndoeeee"));
}

#[test_log::test]
fn version_two_uses_legacy_forms() {
    let mut contact = john_doe();
    contact.version = "2.1".to_string();

    let document = serialize_with(&contact, contact.major_version(), &pinned_options());
    let lines = property_lines(&document);

    assert!(!lines.iter().any(|line| line.starts_with("NICKNAME")));
    assert!(lines.contains(&"EMAIL;CHARSET=utf-8;WORK;INTERNET:john.doe@workmail"));
    assert!(lines.contains(&"PHOTO;png:https://testurl"));
    assert!(lines.contains(&"TEL;TYPE=CELL:12345678900"));
}

#[test_log::test]
fn malformed_version_falls_back_to_legacy() {
    let mut contact = john_doe();
    contact.version = "latest".to_string();

    assert_eq!(contact.major_version(), MajorVersion::UNKNOWN);

    let unknown = serialize_with(&contact, contact.major_version(), &pinned_options());
    let legacy = serialize_with(&contact, MajorVersion::V2, &pinned_options());
    assert_eq!(unknown, legacy);
}

#[test_log::test]
fn formatted_string_uses_record_version() {
    let contact = john_doe();
    let lines: Vec<String> = property_lines(&contact.formatted_string())
        .into_iter()
        .filter(|line| !line.starts_with("REV:"))
        .map(str::to_string)
        .collect();
    let expected: Vec<&str> = property_lines(JOHN_DOE_V3)
        .into_iter()
        .filter(|line| !line.starts_with("REV:"))
        .collect();

    assert_eq!(lines, expected);
}
