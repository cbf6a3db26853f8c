#![allow(clippy::expect_used)]
//! Embedding media from disk.

use rolodex_test::vcard::{Contact, MajorVersion, serialize_with};
use rolodex_test::{pinned_options, property_lines};

#[test_log::test]
fn embedded_photo_is_base64_with_extension_type() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("avatar.png");
    std::fs::write(&path, b"hello").expect("image written");

    let mut contact = Contact::new();
    contact.photo.embed_from_file(&path).expect("image embedded");

    let v4 = serialize_with(&contact, MajorVersion::V4, &pinned_options());
    assert!(property_lines(&v4).contains(&"PHOTO;ENCODING=b;MEDIATYPE=image/PNG:aGVsbG8="));

    let v3 = serialize_with(&contact, MajorVersion::V3, &pinned_options());
    assert!(property_lines(&v3).contains(&"PHOTO;ENCODING=b;TYPE=PNG:aGVsbG8="));

    let v2 = serialize_with(&contact, MajorVersion::V2, &pinned_options());
    assert!(property_lines(&v2).contains(&"PHOTO;ENCODING=BASE64;PNG:aGVsbG8="));
}

#[test_log::test]
fn missing_image_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut contact = Contact::new();

    assert!(contact.logo.embed_from_file(dir.path().join("none.png")).is_err());
    assert_eq!(contact.logo.url, None);
}
