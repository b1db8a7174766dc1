use crate::lut::CharacterRamp;

/// Calculate normalized luma from RGB
///
/// Formula: L = (0.299*R + 0.587*G + 0.114*B) / 255 (BT.601 weights),
/// applied directly to the 8-bit channels without linearization.
///
/// # Returns
/// Brightness in [0.0, 1.0], 0 being black
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}

/// Map a luma value onto a ramp position
///
/// The darkness level floor((1 - luma) * (len - 1)) is counted back from the
/// bright end of the ramp, so black selects index 0 and white the last glyph.
///
/// # Arguments
/// * `luma` - Brightness, nominally in [0.0, 1.0]
/// * `ramp_len` - Number of glyphs in the ramp
pub fn ramp_index(luma: f64, ramp_len: usize) -> usize {
    if ramp_len == 0 {
        return 0;
    }
    let last = ramp_len - 1;
    // The coefficients sum to 1.0 only up to rounding, so white can land a hair outside
    let darkness = (1.0 - luma).clamp(0.0, 1.0);
    let level = ((darkness * last as f64).floor() as usize).min(last);
    last - level
}

/// Select the glyph for an RGB triple from `ramp`.
pub fn select_glyph(rgb: [u8; 3], ramp: &CharacterRamp) -> char {
    let [r, g, b] = rgb;
    ramp.glyph(ramp_index(luma(r, g, b), ramp.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::Charset;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(0, 0, 0), 0.0);
        assert!((luma(255, 255, 255) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_luma_weights_green_highest() {
        assert!(luma(0, 255, 0) > luma(255, 0, 0));
        assert!(luma(255, 0, 0) > luma(0, 0, 255));
    }

    #[test]
    fn test_ramp_index_bounds() {
        assert_eq!(ramp_index(0.0, 10), 0);
        assert_eq!(ramp_index(1.0, 10), 9);
        assert_eq!(ramp_index(1.000_000_1, 10), 9);
        assert_eq!(ramp_index(-0.000_000_1, 10), 0);
        assert_eq!(ramp_index(0.5, 0), 0);
    }

    #[test]
    fn test_ramp_index_mid_grey() {
        // darkness 0.5 * 9 = 4.5 -> level 4 -> index 5
        assert_eq!(ramp_index(0.5, 10), 5);
        // darkness 0.5 * 4 = 2 -> level 2 -> index 2
        assert_eq!(ramp_index(0.5, 5), 2);
    }

    #[test]
    fn test_black_selects_first_detailed_glyph() {
        let ramp = CharacterRamp::from(Charset::Detailed);
        assert_eq!(ramp_index(luma(0, 0, 0), ramp.len()), 0);
        assert_eq!(select_glyph([0, 0, 0], &ramp), ' ');
        assert_eq!(select_glyph([255, 255, 255], &ramp), '@');
    }

    #[test]
    fn test_glyphs_match_dense_first_lookup() {
        let ramp = CharacterRamp::from(Charset::Detailed);
        let dense_first: Vec<char> = "@%#*+=-:. ".chars().collect();
        for v in 0..=255u8 {
            let level = ((1.0 - luma(v, v, v)).clamp(0.0, 1.0) * 9.0).floor() as usize;
            assert_eq!(select_glyph([v, v, v], &ramp), dense_first[level.min(9)], "grey {v}");
        }
    }

    #[test]
    fn test_inverted_ramp_swaps_extremes() {
        let ramp = CharacterRamp::new(Charset::Detailed, true);
        assert_eq!(select_glyph([0, 0, 0], &ramp), '@');
        assert_eq!(select_glyph([255, 255, 255], &ramp), ' ');
    }

    #[test]
    fn test_brighter_never_maps_to_earlier_index() {
        for len in [5usize, 10] {
            let mut previous = 0;
            for v in 0..=255u8 {
                let index = ramp_index(luma(v, v, v), len);
                assert!(index >= previous, "value {v} moved to an earlier slot");
                previous = index;
            }
        }
    }
}
