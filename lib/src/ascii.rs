use std::fmt::{self, Write};

use crate::background::{ALPHA_CUTOFF, BackgroundMask};
use crate::color::{ColorMode, RESET};
use crate::filters::select_glyph;
use crate::lut::CharacterRamp;
use image::{Rgba, RgbaImage};

/// What a single output cell renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Transparent or background pixel, drawn as a reset followed by a space
    Blank,
    /// Ramp glyph with the source color
    Glyph { ch: char, rgb: [u8; 3] },
}

/// Classify one pixel
///
/// # Arguments
/// * `pixel` - Source RGBA sample
/// * `is_background` - Whether the background mask marks this pixel
/// * `ramp` - Character ramp (already inverted if requested)
pub fn select_cell(pixel: &Rgba<u8>, is_background: bool, ramp: &CharacterRamp) -> Cell {
    let [r, g, b, a] = pixel.0;

    if a < ALPHA_CUTOFF || is_background {
        return Cell::Blank;
    }

    Cell::Glyph {
        ch: select_glyph([r, g, b], ramp),
        rgb: [r, g, b],
    }
}

/// Write one cell, colorized according to `color_mode`
pub fn write_cell<W: Write>(out: &mut W, cell: Cell, color_mode: ColorMode) -> fmt::Result {
    match cell {
        Cell::Blank => {
            out.write_str(RESET)?;
            out.write_char(' ')
        }
        Cell::Glyph { ch, rgb } => {
            if color_mode.is_colored() {
                color_mode.write_escape(out, rgb)?;
                out.write_char(ch)?;
                out.write_str(RESET)
            } else {
                out.write_char(ch)
            }
        }
    }
}

/// Write every row of `img` as a newline-terminated line of cells
///
/// # Arguments
/// * `out` - Destination
/// * `img` - Resampled pixels, one per character cell
/// * `mask` - Background mask, present only when background removal is on
/// * `ramp` - Character ramp
/// * `color_mode` - Escape style for glyphs
pub fn write_ascii<W: Write>(
    out: &mut W,
    img: &RgbaImage,
    mask: Option<&BackgroundMask>,
    ramp: &CharacterRamp,
    color_mode: ColorMode,
) -> fmt::Result {
    for (y, row) in img.rows().enumerate() {
        for (x, pixel) in row.enumerate() {
            let is_background = mask.is_some_and(|m| m.is_background(x as u32, y as u32));
            write_cell(out, select_cell(pixel, is_background, ramp), color_mode)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Render `img` to a block of terminal text
///
/// # Returns
/// One line per pixel row, each terminated by `\n`
pub fn render_ascii(
    img: &RgbaImage,
    mask: Option<&BackgroundMask>,
    ramp: &CharacterRamp,
    color_mode: ColorMode,
) -> String {
    let (width, height) = img.dimensions();
    let per_cell = if color_mode.is_colored() { 24 } else { 4 };
    let mut out = String::with_capacity((width as usize * per_cell + 1) * height as usize);

    // Writing into a String cannot fail
    let _ = write_ascii(&mut out, img, mask, ramp, color_mode);
    out
}
