//! vCard record types.
//!
//! - [`Contact`] - The record handed to the serializer
//! - [`Entry`] / [`OneOrMany`] - Multi-valued phone, email and link fields
//! - [`Scalar`] - Text or numeric values that render as text
//! - [`Address`] / [`TypedAddress`] - Postal address blocks
//! - [`Media`] - Photo and logo references
//! - [`MajorVersion`] - The format tier every emitter branches on

mod address;
mod contact;
mod entry;
mod media;
mod scalar;
mod version;

pub use address::{Address, DEFAULT_ADDRESS_TYPE, TypedAddress};
pub use contact::Contact;
pub use entry::{Entry, OneOrMany};
pub use media::Media;
pub use scalar::Scalar;
pub use version::MajorVersion;
