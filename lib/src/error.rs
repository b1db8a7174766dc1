//! Error type shared by the rendering pipeline.

/// Errors that can occur while rendering an image to terminal art
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A render option is out of range or names an unknown variant
    #[error("invalid {field}: {message}")]
    InvalidOption {
        field: &'static str,
        message: String,
    },

    /// The pixel source could not decode or resample the image
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The source image has a zero dimension, so no aspect ratio exists
    #[error("source image is empty ({width}x{height})")]
    EmptySource { width: u32, height: u32 },
}

impl RenderError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        RenderError::InvalidOption {
            field,
            message: message.into(),
        }
    }
}
