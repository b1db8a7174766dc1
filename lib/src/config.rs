use crate::background::DEFAULT_THRESHOLD;
use crate::color::ColorMode;
use crate::error::RenderError;
use crate::lut::Charset;

/// Configuration for terminal art rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output width in character columns, default 80
    pub width: u32,

    /// Colors
    pub color_mode: ColorMode, // default truecolor

    /// Glyphs
    pub charset: Charset, // default blocks
    pub invert: bool,     // default false

    /// Background removal
    pub background_transparent: bool, // default false
    pub background_threshold: u32,    // 0-255, default 250
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 80,
            color_mode: ColorMode::Truecolor,
            charset: Charset::Blocks,
            invert: false,
            background_transparent: false,
            background_threshold: u32::from(DEFAULT_THRESHOLD),
        }
    }
}

impl RenderOptions {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 {
            return Err(RenderError::invalid(
                "width",
                format!("must be greater than 0, got {}", self.width),
            ));
        }
        if self.background_threshold > 255 {
            return Err(RenderError::invalid(
                "background threshold",
                format!("must be between 0 and 255, got {}", self.background_threshold),
            ));
        }
        Ok(())
    }

    /// The background threshold as a channel value.
    ///
    /// Saturates at 255; call [`RenderOptions::validate`] first to reject larger values.
    pub fn threshold(&self) -> u8 {
        u8::try_from(self.background_threshold).unwrap_or(u8::MAX)
    }
}
