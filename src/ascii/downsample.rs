//! Resampling a source image onto the target character grid.

use std::str::FromStr;

use super::pixel::{PixelGrid, Rgb};
use crate::error::{Result, ViewError};

/// Sampling strategy used when shrinking (or growing) a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    /// Point sampling: every output cell copies exactly one source pixel.
    #[default]
    Nearest,
    /// Box filter: every output cell is the mean of the source pixels it covers.
    Average,
}

impl ResampleFilter {
    pub fn name(&self) -> &'static str {
        match self {
            ResampleFilter::Nearest => "nearest",
            ResampleFilter::Average => "average",
        }
    }
}

impl FromStr for ResampleFilter {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(ResampleFilter::Nearest),
            "average" => Ok(ResampleFilter::Average),
            other => Err(ViewError::InvalidSetting(format!(
                "unknown filter '{}'. Available filters: nearest, average",
                other
            ))),
        }
    }
}

/// Resample `source` to `target_width` x `target_height` with nearest-neighbor
/// sampling.
///
/// Output cell (x, y) copies source pixel
/// `(x * src_width / target_width, y * src_height / target_height)` using
/// integer division. Since `x < target_width`, the mapped coordinate is always
/// strictly below `src_width`, so the source is never read out of bounds.
///
/// # Errors
/// `InvalidDimension` if either target dimension is zero.
///
/// # Example
/// ```ignore
/// // Shrink a 640x480 frame to an 80x40 grid
/// let grid = resample(&frame, 80, 40)?;
/// assert_eq!((grid.width(), grid.height()), (80, 40));
/// ```
pub fn resample(source: &PixelGrid, target_width: u32, target_height: u32) -> Result<PixelGrid> {
    check_target(target_width, target_height)?;

    let src_w = source.width() as u64;
    let src_h = source.height() as u64;
    let tw = target_width as u64;
    let th = target_height as u64;

    PixelGrid::from_fn(target_width, target_height, |x, y| {
        let sx = (x as u64 * src_w / tw) as u32;
        let sy = (y as u64 * src_h / th) as u32;
        source.get(sx, sy)
    })
}

/// Resample by averaging every source pixel inside each output cell.
///
/// Cell bounds are `[x * src_w / tw, (x + 1) * src_w / tw)`. When the target
/// is larger than the source a cell can cover no pixel at all; such a cell
/// takes the nearest-neighbor sample instead.
pub fn resample_average(
    source: &PixelGrid,
    target_width: u32,
    target_height: u32,
) -> Result<PixelGrid> {
    check_target(target_width, target_height)?;

    let src_w = source.width() as u64;
    let src_h = source.height() as u64;
    let tw = target_width as u64;
    let th = target_height as u64;

    PixelGrid::from_fn(target_width, target_height, |x, y| {
        let start_x = (x as u64 * src_w / tw) as u32;
        let end_x = ((x as u64 + 1) * src_w / tw) as u32;
        let start_y = (y as u64 * src_h / th) as u32;
        let end_y = ((y as u64 + 1) * src_h / th) as u32;

        let mut sum_r = 0u64;
        let mut sum_g = 0u64;
        let mut sum_b = 0u64;
        let mut count = 0u64;

        for py in start_y..end_y {
            for px in start_x..end_x {
                let c = source.get(px, py);
                sum_r += c.r as u64;
                sum_g += c.g as u64;
                sum_b += c.b as u64;
                count += 1;
            }
        }

        if count > 0 {
            Rgb {
                r: (sum_r / count) as u8,
                g: (sum_g / count) as u8,
                b: (sum_b / count) as u8,
            }
        } else {
            source.get(start_x, start_y)
        }
    })
}

/// Resample with the given filter.
pub fn resample_with(
    source: &PixelGrid,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<PixelGrid> {
    match filter {
        ResampleFilter::Nearest => resample(source, target_width, target_height),
        ResampleFilter::Average => resample_average(source, target_width, target_height),
    }
}

fn check_target(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ViewError::InvalidDimension { width, height });
    }
    Ok(())
}
