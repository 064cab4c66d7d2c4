//! User-supplied files forwarded to the model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Media type used when neither the caller nor the extension names one.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Where an attachment's bytes live.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentSource {
    /// Bytes already held in memory
    Bytes(Vec<u8>),
    /// File read lazily when the request is encoded
    Path(PathBuf),
}

/// A named binary blob with a declared media type.
///
/// No size or type validation happens here; the service decides what it
/// accepts.
///
/// # Examples
///
/// ```
/// use socialseo_core::Attachment;
///
/// let note = Attachment::from_bytes("idea.txt", "text/plain", b"hello".to_vec());
/// assert_eq!(note.name(), "idea.txt");
/// assert_eq!(note.mime_type(), "text/plain");
///
/// let clip = Attachment::from_path_guessed("/tmp/clip.mp4");
/// assert_eq!(clip.mime_type(), "video/mp4");
/// assert_eq!(clip.name(), "clip.mp4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attachment {
    name: String,
    mime_type: String,
    source: AttachmentSource,
}

impl Attachment {
    /// Attachment backed by in-memory bytes.
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            source: AttachmentSource::Bytes(bytes.into()),
        }
    }

    /// Attachment backed by a file with an explicit media type.
    pub fn from_path(path: impl Into<PathBuf>, mime_type: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: display_name(&path),
            mime_type: mime_type.into(),
            source: AttachmentSource::Path(path),
        }
    }

    /// Attachment backed by a file, media type guessed from its extension.
    pub fn from_path_guessed(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mime_type = mime_guess::from_path(&path)
            .first_raw()
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        Self::from_path(path, mime_type)
    }

    /// Plain text note, as produced when seeding from a trend idea.
    pub fn text(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self::from_bytes(name, "text/plain", body.into().into_bytes())
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Byte source.
    pub fn source(&self) -> &AttachmentSource {
        &self.source
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
