//! ANSI color quantization
//!
//! Maps RGB triples onto the xterm 256-color palette (6×6×6 cube plus the
//! 24-step grayscale ramp) or emits them unchanged as 24-bit escapes.

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::error::RenderError;

/// Resets all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// How each glyph is colorized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Bare glyphs, no escapes
    None,
    /// `ESC[38;5;Nm` with N from the 256-color palette
    Indexed256,
    /// `ESC[38;2;R;G;Bm` with the source channels
    #[default]
    Truecolor,
}

impl ColorMode {
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::None => "none",
            ColorMode::Indexed256 => "256",
            ColorMode::Truecolor => "truecolor",
        }
    }

    pub fn is_colored(&self) -> bool {
        !matches!(self, ColorMode::None)
    }

    /// Append the foreground escape for `rgb` to `out`.
    ///
    /// Writes nothing for [`ColorMode::None`].
    pub fn write_escape<W: Write>(&self, out: &mut W, rgb: [u8; 3]) -> fmt::Result {
        let [r, g, b] = rgb;
        match self {
            ColorMode::None => Ok(()),
            ColorMode::Indexed256 => write!(out, "\x1b[38;5;{}m", rgb_to_ansi256(r, g, b)),
            ColorMode::Truecolor => write!(out, "\x1b[38;2;{};{};{}m", r, g, b),
        }
    }

    /// The escape for `rgb` as an owned string, or `None` when uncolored.
    pub fn escape(&self, rgb: [u8; 3]) -> Option<String> {
        if !self.is_colored() {
            return None;
        }
        let mut out = String::with_capacity(20);
        // Writing into a String cannot fail
        let _ = self.write_escape(&mut out, rgb);
        Some(out)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ColorMode::None),
            "256" => Ok(ColorMode::Indexed256),
            "truecolor" => Ok(ColorMode::Truecolor),
            other => Err(RenderError::invalid(
                "color mode",
                format!("expected one of none, 256, truecolor, got '{}'", other),
            )),
        }
    }
}

/// Convert RGB to an xterm 256-color palette index
///
/// Exact grays use the 24-step grayscale ramp (232-255), with the extremes
/// snapped to cube black (16) and cube white (231). Everything else lands in
/// the 6×6×6 cube at 16 + 36r + 6g + b.
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        let step = ((f64::from(r) - 8.0) / 247.0 * 24.0).round() as u8;
        return 232 + step;
    }

    16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
}

/// Quantize one channel to a cube coordinate in [0, 5].
fn cube_index(channel: u8) -> u8 {
    (f64::from(channel) / 255.0 * 5.0).round() as u8
}
