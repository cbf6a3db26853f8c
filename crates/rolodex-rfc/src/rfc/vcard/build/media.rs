//! PHOTO / LOGO rendering.

use super::escape::escape_text;
use crate::rfc::vcard::core::MajorVersion;

/// Renders one media property line.
///
/// The value is always the escaped `url`; when `base64` is set the caller has
/// already placed encoded data there.
#[must_use]
pub fn format_media(
    property: &str,
    url: &str,
    media_type: &str,
    base64: bool,
    version: MajorVersion,
) -> String {
    let params = if version.is_at_least(4) {
        if base64 {
            ";ENCODING=b;MEDIATYPE=image/"
        } else {
            ";MEDIATYPE=image/"
        }
    } else if version.is(3) {
        if base64 { ";ENCODING=b;TYPE=" } else { ";TYPE=" }
    } else if base64 {
        ";ENCODING=BASE64;"
    } else {
        ";"
    };

    format!("{property}{params}{media_type}:{}", escape_text(url))
}
