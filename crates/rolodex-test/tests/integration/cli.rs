#![allow(clippy::expect_used)]
//! The command-line flow: read a record, render it, save the document.

use rolodex_app::cli::{RenderOptions, default_output_path, render};
use rolodex_app::persist::{read_record, save_to_file};
use rolodex_test::{JOHN_DOE_JSON, property_lines};

fn options(version_override: Option<&str>, fold_lines: bool) -> RenderOptions {
    RenderOptions {
        version_override: version_override.map(str::to_string),
        default_version: "3.0".to_string(),
        fold_lines,
    }
}

#[test_log::test(tokio::test)]
async fn record_file_round_trips_to_vcf_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let record_path = dir.path().join("john.json");
    tokio::fs::write(&record_path, JOHN_DOE_JSON)
        .await
        .expect("record written");

    let input = read_record(&record_path).await.expect("record read");
    let document = render(&input, &options(None, false)).expect("record renders");

    let output_path = default_output_path(&record_path);
    assert_eq!(output_path, dir.path().join("john.vcf"));
    save_to_file(&output_path, &document)
        .await
        .expect("document saved");

    let saved = tokio::fs::read_to_string(&output_path)
        .await
        .expect("document readable");
    assert_eq!(saved, document);

    let lines = property_lines(&saved);
    assert_eq!(lines.first(), Some(&"BEGIN:VCARD"));
    assert_eq!(lines.last(), Some(&"END:VCARD"));
    assert!(lines.contains(&"TEL;TYPE=CUSTOM WORK LABEL,VOICE:312-555-1212"));
}

#[test_log::test(tokio::test)]
async fn saves_into_missing_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output_path = dir.path().join("out/cards/john.vcf");

    let document = render(JOHN_DOE_JSON, &options(Some("4.0"), false)).expect("record renders");
    save_to_file(&output_path, &document)
        .await
        .expect("document saved");

    let saved = tokio::fs::read_to_string(&output_path)
        .await
        .expect("document readable");
    assert!(saved.starts_with("BEGIN:VCARD\r\nVERSION:4.0\r\n"));
}

#[test_log::test]
fn record_without_version_uses_configured_default() {
    let opts = RenderOptions {
        default_version: "2.1".to_string(),
        ..options(None, false)
    };

    let document = render(r#"{"firstName": "Jane", "nickname": "J"}"#, &opts)
        .expect("record renders");

    assert!(document.contains("VERSION:2.1\r\n"));
    assert!(!document.contains("NICKNAME"));
}

#[test_log::test]
fn folding_keeps_lines_short() {
    let record = format!(r#"{{"version": "4.0", "note": "{}"}}"#, "word ".repeat(60));

    let document = render(&record, &options(None, true)).expect("record renders");

    for line in document.split("\r\n") {
        assert!(line.len() <= 75, "line too long: {line:?}");
    }
    assert!(document.contains("\r\n "));
}

#[test_log::test]
fn invalid_record_is_an_error() {
    assert!(render(r#"{"cellPhone": {"label": 1}}"#, &options(None, false)).is_err());
}
