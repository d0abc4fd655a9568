//! Luminance computation and luminance-to-glyph index mapping.

use super::pixel::Rgb;

/// Perceptual luminance of a color using the ITU-R BT.601 weights.
///
/// The formula is: Y = 0.299*R + 0.587*G + 0.114*B, giving a value in
/// [0.0, 255.0] (up to floating-point rounding at the top end).
#[inline]
pub fn luminance(color: Rgb) -> f64 {
    0.299 * color.r as f64 + 0.587 * color.g as f64 + 0.114 * color.b as f64
}

/// Map a color to a position in a glyph ramp of `ramp_len` entries.
///
/// The index is `round(Y / 255 * (ramp_len - 1))`, clamped so that pure white
/// never overflows the ramp. Darker colors map to earlier positions and the
/// mapping never decreases as luminance grows.
///
/// A ramp of 0 or 1 entries always maps to 0.
#[inline]
pub fn luminance_index(r: u8, g: u8, b: u8, ramp_len: usize) -> usize {
    let last = ramp_len.saturating_sub(1);
    if last == 0 {
        return 0;
    }
    let y = luminance(Rgb { r, g, b });
    let idx = (y / 255.0 * last as f64).round();
    (idx.max(0.0) as usize).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights() {
        assert!((luminance(Rgb::new(255, 0, 0)) - 76.245).abs() < 1e-9);
        assert!((luminance(Rgb::new(0, 255, 0)) - 149.685).abs() < 1e-9);
        assert!((luminance(Rgb::new(0, 0, 255)) - 29.07).abs() < 1e-9);
    }

    #[test]
    fn test_black_and_white_hit_ends() {
        assert_eq!(luminance_index(0, 0, 0, 10), 0);
        assert_eq!(luminance_index(255, 255, 255, 10), 9);
        assert_eq!(luminance_index(255, 255, 255, 68), 67);
    }

    #[test]
    fn test_mid_gray_rounds() {
        // 128/255 * 9 = 4.517 -> 5
        assert_eq!(luminance_index(128, 128, 128, 10), 5);
        // 127/255 * 9 = 4.482 -> 4
        assert_eq!(luminance_index(127, 127, 127, 10), 4);
    }

    #[test]
    fn test_degenerate_ramps() {
        assert_eq!(luminance_index(255, 255, 255, 0), 0);
        assert_eq!(luminance_index(255, 255, 255, 1), 0);
    }

    #[test]
    fn test_green_brighter_than_red_brighter_than_blue() {
        let red = luminance_index(255, 0, 0, 100);
        let green = luminance_index(0, 255, 0, 100);
        let blue = luminance_index(0, 0, 255, 100);
        assert!(green > red);
        assert!(red > blue);
    }
}
