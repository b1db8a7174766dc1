use std::path::Path;

use crate::ascii::render_ascii;
use crate::background::detect_background;
use crate::config::RenderOptions;
use crate::error::RenderError;
use crate::lut::CharacterRamp;
use image::{DynamicImage, RgbaImage, imageops};

/// Terminal cells are roughly twice as tall as they are wide
pub const CELL_ASPECT: f64 = 0.5;

/// Something that can hand out an RGBA buffer at a requested size
pub trait PixelSource {
    /// Native (width, height) before any resampling
    fn dimensions(&self) -> (u32, u32);

    /// Resample to exactly `width` × `height` RGBA pixels
    fn resample(&self, width: u32, height: u32) -> Result<RgbaImage, RenderError>;
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn resample(&self, width: u32, height: u32) -> Result<RgbaImage, RenderError> {
        if RgbaImage::dimensions(self) == (width, height) {
            return Ok(self.clone());
        }
        Ok(imageops::resize(
            self,
            width,
            height,
            imageops::FilterType::Lanczos3,
        ))
    }
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn resample(&self, width: u32, height: u32) -> Result<RgbaImage, RenderError> {
        // Ignores aspect ratio, the caller has already corrected for it
        Ok(self
            .resize_exact(width, height, imageops::FilterType::Lanczos3)
            .to_rgba8())
    }
}

/// Number of character rows for a given column count
///
/// H = round(W × (native_height / native_width) × 0.5)
///
/// # Arguments
/// * `width` - Target character columns
/// * `native_width` - Source image width in pixels (non-zero)
/// * `native_height` - Source image height in pixels
pub fn target_height(width: u32, native_width: u32, native_height: u32) -> u32 {
    let aspect = f64::from(native_height) / f64::from(native_width);
    (f64::from(width) * aspect * CELL_ASPECT).round() as u32
}

/// Renders an already resampled pixel buffer to terminal text
///
/// One character cell is produced per pixel. Background detection runs only
/// when `background_transparent` is set.
///
/// # Arguments
/// * `pixels` - RGBA buffer, one pixel per output cell
/// * `options` - Rendering options
///
/// # Returns
/// The text block, one newline-terminated line per pixel row
pub fn render_pixels(pixels: &RgbaImage, options: &RenderOptions) -> Result<String, RenderError> {
    options.validate()?;

    let ramp = CharacterRamp::new(options.charset, options.invert);
    let mask = options
        .background_transparent
        .then(|| detect_background(pixels, options.threshold()));

    log::trace!(
        "rendering {}x{} cells, charset {}, color {}",
        pixels.width(),
        pixels.height(),
        options.charset,
        options.color_mode
    );

    Ok(render_ascii(
        pixels,
        mask.as_ref(),
        &ramp,
        options.color_mode,
    ))
}

/// Processes a pixel source and converts it to terminal art
///
/// This runs the full pipeline:
/// 1. Validate options
/// 2. Compute the aspect-corrected character height
/// 3. Resample the source to one pixel per cell
/// 4. Flood fill the border-connected background (optional)
/// 5. Map each pixel to a glyph and color escape
///
/// # Arguments
/// * `source` - The image to render
/// * `options` - Rendering options
///
/// # Returns
/// The rendered text block; empty when the computed height rounds to zero
pub fn process_image<S: PixelSource + ?Sized>(
    source: &S,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    options.validate()?;

    let (native_width, native_height) = source.dimensions();
    if native_width == 0 || native_height == 0 {
        return Err(RenderError::EmptySource {
            width: native_width,
            height: native_height,
        });
    }

    let height = target_height(options.width, native_width, native_height);
    log::debug!(
        "resampling {}x{} source to {}x{} cells",
        native_width,
        native_height,
        options.width,
        height
    );
    if height == 0 {
        log::warn!(
            "{}x{} source is too wide to fill a single row at width {}",
            native_width,
            native_height,
            options.width
        );
        return Ok(String::new());
    }

    let pixels = source.resample(options.width, height)?;
    render_pixels(&pixels, options)
}

/// Decodes the image at `path` and converts it to terminal art
///
/// Options are validated before the file is opened.
pub fn process_path(path: impl AsRef<Path>, options: &RenderOptions) -> Result<String, RenderError> {
    options.validate()?;
    let path = path.as_ref();
    log::debug!("decoding {}", path.display());
    let image = image::open(path)?;
    process_image(&image, options)
}
