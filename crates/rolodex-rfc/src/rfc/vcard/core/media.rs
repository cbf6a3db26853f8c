//! Photo and logo references.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rolodex_core::constants::DEFAULT_MEDIA_TYPE;
use serde::{Deserialize, Serialize};

use crate::error::RfcResult;

/// A photo or logo (PHOTO / LOGO property).
///
/// `url` holds either a remote reference or, when `base64` is set, the
/// base64-encoded image data itself. Nothing is emitted without a `url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Media {
    pub url: Option<String>,
    /// Image subtype, e.g. `png` or `JPEG`.
    pub media_type: Option<String>,
    pub base64: bool,
}

impl Media {
    /// Points the media at a remote URL.
    pub fn attach_from_url(&mut self, url: impl Into<String>, media_type: Option<&str>) {
        self.url = Some(url.into());
        self.media_type = Some(media_type.unwrap_or(DEFAULT_MEDIA_TYPE).to_string());
        self.base64 = false;
    }

    /// Embeds data that the caller has already base64-encoded.
    pub fn embed_from_base64(&mut self, data: impl Into<String>, media_type: Option<&str>) {
        self.url = Some(data.into());
        self.media_type = Some(media_type.unwrap_or(DEFAULT_MEDIA_TYPE).to_string());
        self.base64 = true;
    }

    /// Embeds raw image bytes, base64-encoding them.
    pub fn embed_from_bytes(&mut self, bytes: &[u8], media_type: Option<&str>) {
        self.embed_from_base64(STANDARD.encode(bytes), media_type);
    }

    /// Embeds the contents of an image file.
    ///
    /// The media type is the upper-cased file extension (`photo.png` → `PNG`).
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read.
    pub fn embed_from_file(&mut self, path: impl AsRef<Path>) -> RfcResult<()> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let media_type = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_uppercase());

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Embedding media file");

        self.embed_from_bytes(&bytes, media_type.as_deref());
        Ok(())
    }

    /// Returns the URL if one is set and non-empty.
    #[must_use]
    pub fn present_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}
