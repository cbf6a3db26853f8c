//! vCard serialization for format versions 2.1, 3.0 and 4.0.
//!
//! ## Overview
//!
//! A [`Contact`] record is written as one vCard document. Every property
//! rule branches on an explicit [`MajorVersion`], so the same record can be
//! rendered in each dialect without touching the record itself.
//!
//! ## Usage
//!
//! ### Building a record
//!
//! ```rust
//! use rolodex_rfc::rfc::vcard::{Contact, Entry, OneOrMany, serialize};
//!
//! let mut contact = Contact::new();
//! contact.version = "4.0".to_string();
//! contact.first_name = Some("Jane".into());
//! contact.last_name = Some("Doe".into());
//! contact.work_phone = Some(OneOrMany::Many(vec![
//!     Entry::bare("312-555-1212"),
//!     Entry::labeled("CUSTOM WORK LABEL", "312-555-1213"),
//! ]));
//! contact.photo.attach_from_url("https://example.com/jane.png", Some("png"));
//!
//! let output = serialize(&contact, contact.major_version());
//! assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:4.0\r\n"));
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ### From JSON
//!
//! ```rust
//! use rolodex_rfc::rfc::vcard::Contact;
//!
//! let contact = Contact::from_json(r#"{"version": "3.0", "firstName": "John", "cellPhone": 12345678900}"#)
//!     .unwrap();
//!
//! assert!(contact.formatted_string().contains("TEL;TYPE=CELL:12345678900\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Record types (`Contact`, `Entry`, `Address`, `Media`, etc.)
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;

pub use build::{SerializeOptions, serialize, serialize_with};
pub use core::{
    Address, Contact, DEFAULT_ADDRESS_TYPE, Entry, MajorVersion, Media, OneOrMany, Scalar,
    TypedAddress,
};
