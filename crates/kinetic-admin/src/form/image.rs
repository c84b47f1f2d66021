use kinetic_core::image::{ImageFile, ImagePreview};

use super::{FieldErrors, field};

/// The image input: the file value validation looks at, and the preview
/// shown next to it.
#[derive(Debug, Clone, Default)]
pub struct ImageField {
    file: Option<ImageFile>,
    preview: ImagePreview,
}

impl ImageField {
    /// Pre-populated from a stored image so an unchanged image needs no
    /// re-upload.
    pub fn seeded(remote_url: &str, file: ImageFile) -> Self {
        Self {
            file: Some(file),
            preview: ImagePreview::Remote(remote_url.to_string()),
        }
    }

    /// Pick a new file, or clear the input with `None`.
    pub fn select(&mut self, file: Option<ImageFile>) {
        match file {
            Some(file) => {
                self.preview = ImagePreview::Local(file.to_data_url());
                self.file = Some(file);
            }
            None => {
                self.file = None;
                self.preview = ImagePreview::Empty;
            }
        }
    }

    pub fn file(&self) -> Option<&ImageFile> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> &ImagePreview {
        &self.preview
    }

    pub(crate) fn validate(&self, errors: &mut FieldErrors) {
        match &self.file {
            None => {
                errors.insert(field::IMAGE_FILE, "Please upload an image".to_string());
            }
            // The seeded stored image is never re-uploaded, so only a newly
            // picked file has to be PNG or JPEG.
            Some(file) if self.preview.is_replacement() && !file.is_supported() => {
                errors.insert(
                    field::IMAGE_FILE,
                    "Only PNG or JPEG images are supported".to_string(),
                );
            }
            Some(_) => {}
        }
    }
}
