//! Character ramp lookup tables
//!
//! Ramps run from the darkest-looking glyph to the brightest, as seen on a
//! dark terminal: index 0 is a blank cell and the last entry is the densest.

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// Ten ASCII symbols
pub const DETAILED_CHARS: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Five Unicode shade blocks
pub const SIMPLE_CHARS: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Shade blocks doubled up, giving the same 10 levels as the detailed ramp
pub const BLOCK_CHARS: [char; 10] = [' ', ' ', '░', '░', '▒', '▒', '▓', '▓', '█', '█'];

/// Built-in character set selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    Detailed,
    Simple,
    #[default]
    Blocks,
}

impl Charset {
    /// The static glyph table backing this charset.
    pub fn chars(&self) -> &'static [char] {
        match self {
            Charset::Detailed => &DETAILED_CHARS,
            Charset::Simple => &SIMPLE_CHARS,
            Charset::Blocks => &BLOCK_CHARS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Charset::Detailed => "detailed",
            Charset::Simple => "simple",
            Charset::Blocks => "blocks",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "detailed" => Ok(Charset::Detailed),
            "simple" => Ok(Charset::Simple),
            "blocks" => Ok(Charset::Blocks),
            other => Err(RenderError::invalid(
                "charset",
                format!("expected one of detailed, simple, blocks, got '{}'", other),
            )),
        }
    }
}

/// An ordered glyph sequence used to represent brightness levels
///
/// Built once per render; inversion reverses the sequence up front so the
/// per-pixel lookup never has to care about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRamp {
    glyphs: Vec<char>,
}

impl CharacterRamp {
    pub fn new(charset: Charset, invert: bool) -> Self {
        let ramp = Self {
            glyphs: charset.chars().to_vec(),
        };
        if invert { ramp.inverted() } else { ramp }
    }

    /// Returns the ramp with its glyph order reversed.
    pub fn inverted(mut self) -> Self {
        self.glyphs.reverse();
        self
    }

    pub(crate) fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Glyph at `index`, clamped to the last entry.
    ///
    /// # Panics
    /// Panics if the ramp is empty, which the built-in charsets never are.
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }
}

impl From<Charset> for CharacterRamp {
    fn from(charset: Charset) -> Self {
        CharacterRamp::new(charset, false)
    }
}
