use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::CoreError;

/// Content types the forms accept for uploads.
pub const SUPPORTED_CONTENT_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// An image held in memory: a freshly picked local file, or a stored
/// object downloaded back so an edit form has a real file value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its content type from the extension.
    pub async fn read(path: &Path) -> Result<Self, CoreError> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| CoreError::MissingField("file name".to_string()))?;
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(Self::new(name, content_type, bytes))
    }

    pub fn is_supported(&self) -> bool {
        SUPPORTED_CONTENT_TYPES.contains(&self.content_type.as_str())
    }

    /// Encode as a `data:` URL suitable for an inline preview.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, STANDARD.encode(&self.bytes))
    }
}

/// What an image input currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImagePreview {
    #[default]
    Empty,
    /// The entity's stored image, shown unchanged.
    Remote(String),
    /// A `data:` URL derived from a locally picked file.
    Local(String),
}

impl ImagePreview {
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Remote(url) | Self::Local(url) => Some(url.as_str()),
        }
    }

    /// True when the user picked a new file, replacing the stored image.
    pub fn is_replacement(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}
