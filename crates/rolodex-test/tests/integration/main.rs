//! End-to-end tests: JSON record → vCard document → file.

mod cli;
mod document;
mod media;
