//! Logo Renderer - image to ANSI terminal art converter
//!
//! Each pixel of a resampled image becomes one terminal cell: its brightness
//! picks a glyph from a character ramp and its color is emitted as a 256-color
//! or truecolor escape. Light or transparent background connected to the
//! image border can be blanked out while enclosed highlights are kept.
//!
//! # Example
//! ```no_run
//! use logo_rendr::{process_path, ColorMode, RenderOptions};
//!
//! let options = RenderOptions {
//!     width: 60,
//!     color_mode: ColorMode::Indexed256,
//!     background_transparent: true,
//!     ..Default::default()
//! };
//! let art = process_path("logo.png", &options).unwrap();
//! print!("{art}");
//! ```

pub mod ascii;
pub mod background;
pub mod color;
pub mod config;
pub mod error;
pub mod filters;
pub mod lut;
pub mod processor;

/// RGBA8 pixel buffer, row-major with no padding
pub type PixelBuffer = image::RgbaImage;

// Re-export main types for convenience
pub use background::{BackgroundMask, detect_background};
pub use color::{ColorMode, RESET, rgb_to_ansi256};
pub use config::RenderOptions;
pub use error::RenderError;
pub use lut::{CharacterRamp, Charset};
pub use processor::{PixelSource, process_image, process_path, render_pixels, target_height};
