//! vCard serialization.
//!
//! ## Usage
//!
//! ```rust
//! use rolodex_rfc::rfc::vcard::{Contact, MajorVersion, serialize};
//!
//! let mut contact = Contact::new();
//! contact.first_name = Some("John".into());
//! contact.last_name = Some("Doe".into());
//!
//! let output = serialize(&contact, MajorVersion::V3);
//! assert!(output.contains("FN;CHARSET=utf-8:John Doe\r\n"));
//! ```
//!
//! ## Features
//!
//! - Version 2, 3 and 4 dialects selected by [`MajorVersion`](super::core::MajorVersion)
//! - Escaping of newline, comma and semicolon in text values
//! - Version-aware ADR/LABEL, PHOTO/LOGO, EMAIL and TEL parameters
//! - Optional line folding at 75 octets (UTF-8 safe)

mod address;
mod date;
mod emit;
mod escape;
mod fold;
mod media;
mod serializer;

pub use address::format_address;
pub use date::format_date;
pub use escape::{escape_text, escape_value};
pub use fold::push_folded;
pub use media::format_media;
pub use serializer::{SerializeOptions, serialize, serialize_with};
