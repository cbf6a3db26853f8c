//! Rolodex vCard writer - integration test support.
//!
//! Provides shared record fixtures for the integration tests.

pub use rolodex_rfc::rfc::vcard;

use chrono::{TimeZone, Utc};
use vcard::SerializeOptions;

/// A JSON record exercising every field shape: bare and labeled entries,
/// numeric values, typed addresses and social links.
pub const JOHN_DOE_JSON: &str = r#"{
    "version": "3.0",
    "uid": "69531f4a-c34d-4a1e-8922-bd38a9476a53",
    "firstName": "John",
    "middleName": "D",
    "lastName": "Doe",
    "namePrefix": "MR",
    "nameSuffix": "JR",
    "nickname": "Test User",
    "gender": "M",
    "birthday": "2018-12-01",
    "anniversary": "2018-12-01",
    "organization": "ACME Corporation",
    "title": "Crash Test Dummy",
    "role": "Crash Testing",
    "photo": {"url": "https://testurl", "mediaType": "png"},
    "logo": {"url": "https://testurl", "mediaType": "png"},
    "workPhone": ["312-555-1212", {"label": "CUSTOM WORK LABEL", "number": "312-555-1212"}],
    "homePhone": "312-555-1313",
    "cellPhone": 12345678900,
    "homeFax": "312-555-1616",
    "otherPhone": [{"label": "CUSTOM LABEL", "number": "312-555-1316"}],
    "email": ["john.doe@testmail", {"email": "john.doe@testmail", "label": "Custom Private Label"}],
    "workEmail": "john.doe@workmail",
    "url": {"url": "http://johndoeeee", "label": "Custom URL Label"},
    "homeAddress": {
        "label": "Home Address",
        "street": "123 Main Street",
        "city": "Chicago",
        "stateProvince": "IL",
        "postalCode": 12345,
        "countryRegion": "United States of America"
    },
    "otherAddresses": [
        {"street": "124 Main Street", "city": "Los Angeles", "stateProvince": "CA"},
        {"type": "WORK", "street": "123 Corporate Loop\nSuite 502"}
    ],
    "note": "John Doe's \nnotes;,",
    "socialUrls": {
        "facebook": "https://facebook/johndoe",
        "tapni": ["https://t.link", "https://t.link"],
        "empty": []
    },
    "source": "http://sourceurl",
    "isOrganization": true
}"#;

/// Serializer options with REV pinned, for whole-document comparisons.
#[must_use]
pub fn pinned_options() -> SerializeOptions {
    SerializeOptions {
        fold_lines: false,
        revised_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).single(),
    }
}

/// Splits a document into its property lines, dropping the trailing empty line.
#[must_use]
pub fn property_lines(document: &str) -> Vec<&str> {
    document
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .collect()
}
