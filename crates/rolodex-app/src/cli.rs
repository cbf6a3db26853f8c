//! Command-line interface for rolodex.
//!
//! Parses arguments and turns them, together with the loaded configuration,
//! into the render options and output target used by `main`.

use std::path::{Path, PathBuf};

use clap::Parser;
use rolodex_core::config::OutputConfig;
use rolodex_core::constants::VCF_EXTENSION;
use rolodex_rfc::rfc::vcard::{Contact, SerializeOptions, serialize_with};

use crate::error::AppResult;

/// Write a JSON contact record as a vCard
#[derive(Parser, Debug)]
#[command(
    name = "rolodex",
    version,
    about = "Convert JSON contact records to vCard 2.1, 3.0 or 4.0"
)]
pub struct CliArgs {
    /// JSON contact record
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Output file, or `-` for stdout
    ///
    /// Defaults to the record path with a `.vcf` extension.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Format version to write (e.g. 2.1, 3.0, 4.0), overriding the record's own
    #[arg(long = "format-version", value_name = "VERSION")]
    pub format_version: Option<String>,

    /// Fold lines longer than 75 octets
    #[arg(long)]
    pub fold: bool,
}

/// Where the serialized document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl CliArgs {
    #[must_use]
    pub fn output_target(&self) -> OutputTarget {
        match &self.output {
            Some(path) if path.as_os_str() == "-" => OutputTarget::Stdout,
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::File(default_output_path(&self.record)),
        }
    }
}

/// `contacts/jane.json` → `contacts/jane.vcf`
#[must_use]
pub fn default_output_path(record: &Path) -> PathBuf {
    record.with_extension(VCF_EXTENSION)
}

/// Resolved rendering choices for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Replaces the record's version when set.
    pub version_override: Option<String>,
    /// Used when the record has no version of its own.
    pub default_version: String,
    pub fold_lines: bool,
}

impl RenderOptions {
    /// Command-line flags take precedence over configuration.
    #[must_use]
    pub fn from_args(args: &CliArgs, output: &OutputConfig) -> Self {
        Self {
            version_override: args.format_version.clone(),
            default_version: output.default_version.clone(),
            fold_lines: args.fold || output.fold_lines,
        }
    }
}

/// Parses a JSON record and serializes it as a vCard document.
///
/// ## Errors
/// Returns an error if the record is not valid JSON or does not match the record shape.
pub fn render(input: &str, options: &RenderOptions) -> AppResult<String> {
    let mut contact = Contact::from_json_with_default(input, &options.default_version)?;
    if let Some(version) = &options.version_override {
        contact.version.clone_from(version);
    }

    let version = contact.major_version();
    tracing::debug!(display = %contact.version, major = %version, "Rendering record");

    Ok(serialize_with(
        &contact,
        version,
        &SerializeOptions {
            fold_lines: options.fold_lines,
            revised_at: None,
        },
    ))
}
