//! Target grid dimension calculation.

use crate::error::{Result, ViewError};

/// Default terminal character aspect ratio.
/// Terminal characters are typically ~2x taller than wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Target grid size for a given column count, ignoring the source shape.
///
/// Rows are `width / 2` (at least 1), which compensates for terminal cells
/// being roughly twice as tall as they are wide.
///
/// # Errors
/// `InvalidDimension` if `width` is zero.
pub fn target_dimensions(width: u32) -> Result<(u32, u32)> {
    if width == 0 {
        return Err(ViewError::InvalidDimension { width, height: 0 });
    }
    Ok((width, (width / 2).max(1)))
}

/// Target grid size that preserves the source aspect ratio.
///
/// A `img_width` x `img_height` image rendered `width` columns wide needs
/// `width * img_height / img_width / char_aspect` rows to keep its shape on
/// screen.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `width` - Output width in characters
/// * `char_aspect` - Terminal character aspect ratio (height/width, typically ~2.0)
///
/// # Example
/// ```ignore
/// // A 640x480 (4:3) image, 80 columns wide -> 80x30
/// let (w, h) = fit_dimensions(640, 480, 80, 2.0)?;
/// ```
pub fn fit_dimensions(
    img_width: u32,
    img_height: u32,
    width: u32,
    char_aspect: f32,
) -> Result<(u32, u32)> {
    if width == 0 || img_width == 0 || img_height == 0 {
        return Err(ViewError::InvalidDimension {
            width,
            height: img_height,
        });
    }
    let char_aspect = if char_aspect > 0.0 {
        char_aspect
    } else {
        DEFAULT_CHAR_ASPECT_RATIO
    };

    let rows = width as f64 * img_height as f64 / img_width as f64 / char_aspect as f64;
    Ok((width, (rows.round() as u32).max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_dimensions_halves_width() {
        assert_eq!(target_dimensions(200).unwrap(), (200, 100));
        assert_eq!(target_dimensions(81).unwrap(), (81, 40));
    }

    #[test]
    fn test_target_dimensions_minimum_one_row() {
        assert_eq!(target_dimensions(1).unwrap(), (1, 1));
    }

    #[test]
    fn test_target_dimensions_zero_width() {
        assert!(matches!(
            target_dimensions(0),
            Err(ViewError::InvalidDimension { width: 0, .. })
        ));
    }

    #[test]
    fn test_fit_dimensions_4_3() {
        assert_eq!(fit_dimensions(640, 480, 80, 2.0).unwrap(), (80, 30));
    }

    #[test]
    fn test_fit_dimensions_square() {
        assert_eq!(fit_dimensions(100, 100, 40, 2.0).unwrap(), (40, 20));
    }

    #[test]
    fn test_fit_dimensions_wide_image_keeps_one_row() {
        assert_eq!(fit_dimensions(10_000, 1, 10, 2.0).unwrap(), (10, 1));
    }

    #[test]
    fn test_fit_dimensions_bad_aspect_uses_default() {
        assert_eq!(fit_dimensions(100, 100, 40, 0.0).unwrap(), (40, 20));
    }
}
