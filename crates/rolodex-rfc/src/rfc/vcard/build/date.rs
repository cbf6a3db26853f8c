//! Compact date rendering.

use chrono::Datelike;

/// Formats a date as `YYYYMMDD`.
///
/// Any time-of-day or zone carried by the value is ignored.
#[must_use]
pub fn format_date(date: &impl Datelike) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}
