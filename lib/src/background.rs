//! Border-connected background detection
//!
//! A plain threshold would also blank out light regions inside the subject
//! (the white of an eye, a highlight). Instead, background is grown from the
//! image border with a breadth-first flood fill, so only light or transparent
//! pixels that touch the outside are removed.

use std::collections::VecDeque;

use image::{Rgba, RgbaImage};

/// Alpha below this counts as transparent.
pub const ALPHA_CUTOFF: u8 = 128;

/// Default per-channel threshold for "near white".
pub const DEFAULT_THRESHOLD: u8 = 250;

/// Per-pixel flags marking the border-connected background region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundMask {
    width: u32,
    height: u32,
    flags: Vec<bool>,
}

/// Row-major offset of (x, y), computed in `usize` so large buffers cannot wrap.
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

impl BackgroundMask {
    /// Whether the pixel at (x, y) is background. Out-of-bounds is `false`.
    pub fn is_background(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.flags[pixel_index(self.width, x, y)]
    }

    /// Number of pixels marked as background.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }
}

/// Whether a pixel is transparent or near white on every channel
///
/// Translucent pixels qualify regardless of their color.
pub fn is_background_like(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, a] = pixel.0;
    if a < ALPHA_CUTOFF {
        return true;
    }
    r >= threshold && g >= threshold && b >= threshold
}

/// Flood fill background from every background-like border pixel
///
/// Expands through 4-connected neighbours only. Each pixel is enqueued at
/// most once, so this runs in O(width × height).
///
/// # Arguments
/// * `img` - Resampled RGBA buffer
/// * `threshold` - Minimum value on all of R, G and B for a pixel to count as background
///
/// # Returns
/// A mask that marks pixels which are background-like *and* reachable from
/// the border through background-like pixels
pub fn detect_background(img: &RgbaImage, threshold: u8) -> BackgroundMask {
    let (width, height) = img.dimensions();
    let mut flags = vec![false; (width as usize) * (height as usize)];
    let mut queue = VecDeque::new();

    if width == 0 || height == 0 {
        return BackgroundMask {
            width,
            height,
            flags,
        };
    }

    let seed = |x: u32, y: u32, flags: &mut Vec<bool>, queue: &mut VecDeque<(u32, u32)>| {
        let idx = pixel_index(width, x, y);
        if !flags[idx] && is_background_like(img.get_pixel(x, y), threshold) {
            flags[idx] = true;
            queue.push_back((x, y));
        }
    };

    for x in 0..width {
        seed(x, 0, &mut flags, &mut queue);
        seed(x, height - 1, &mut flags, &mut queue);
    }
    for y in 1..height.saturating_sub(1) {
        seed(0, y, &mut flags, &mut queue);
        seed(width - 1, y, &mut flags, &mut queue);
    }

    while let Some((x, y)) = queue.pop_front() {
        let neighbours = [
            (y > 0).then(|| (x, y - 1)),
            (y + 1 < height).then(|| (x, y + 1)),
            (x > 0).then(|| (x - 1, y)),
            (x + 1 < width).then(|| (x + 1, y)),
        ];

        for (nx, ny) in neighbours.into_iter().flatten() {
            seed(nx, ny, &mut flags, &mut queue);
        }
    }

    let mask = BackgroundMask {
        width,
        height,
        flags,
    };
    log::debug!(
        "background fill marked {} of {} pixels (threshold {})",
        mask.count(),
        mask.flags.len(),
        threshold
    );
    mask
}
