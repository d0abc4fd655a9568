//! Pixel grid types consumed by the resampler and renderer.

use crate::error::{Result, ViewError};

/// An 8-bit RGB color. Alpha is never carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A gray color with all three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

/// A decoded image: row-major RGB triples, 3 bytes per pixel.
///
/// Width and height are always at least 1, and `data.len()` is always
/// `width * height * 3`. A grid never changes once built; the resampler
/// produces a fresh one per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelGrid {
    /// Bytes per pixel (RGB).
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Build a grid from raw RGB bytes.
    ///
    /// Fails with `InvalidDimension` if either dimension is zero or the
    /// buffer length does not match.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ViewError::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * Self::BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(ViewError::InvalidDimension { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a grid filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * Self::BYTES_PER_PIXEL);
        for _ in 0..count {
            data.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Self::from_raw(width, height, data)
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Result<Self> {
        let mut data = Vec::with_capacity(width as usize * height as usize * Self::BYTES_PER_PIXEL);
        for y in 0..height {
            for x in 0..width {
                let c = f(x, y);
                data.extend_from_slice(&[c.r, c.g, c.b]);
            }
        }
        Self::from_raw(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at (x, y).
    ///
    /// Panics if the coordinate is outside the grid; the resampler only ever
    /// asks for in-bounds coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        let idx = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        Rgb {
            r: self.data[idx],
            g: self.data[idx + 1],
            b: self.data[idx + 2],
        }
    }

    /// One row of pixels as colors.
    pub fn row(&self, y: u32) -> impl Iterator<Item = Rgb> + '_ {
        (0..self.width).map(move |x| self.get(x, y))
    }
}

impl TryFrom<image::RgbImage> for PixelGrid {
    type Error = ViewError;

    fn try_from(img: image::RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }
}

impl TryFrom<image::DynamicImage> for PixelGrid {
    type Error = ViewError;

    /// Converts to 8-bit RGB, dropping any alpha channel.
    fn try_from(img: image::DynamicImage) -> Result<Self> {
        Self::try_from(img.into_rgb8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_rejects_zero_dimensions() {
        assert!(matches!(
            PixelGrid::from_raw(0, 1, vec![]),
            Err(ViewError::InvalidDimension { width: 0, height: 1 })
        ));
        assert!(PixelGrid::from_raw(1, 0, vec![]).is_err());
    }

    #[test]
    fn test_from_raw_rejects_length_mismatch() {
        assert!(PixelGrid::from_raw(2, 1, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_get_reads_row_major() {
        // 2x2: A B / C D
        let grid = PixelGrid::from_raw(
            2,
            2,
            vec![
                1, 1, 1, 2, 2, 2, // Row 0
                3, 3, 3, 4, 4, 4, // Row 1
            ],
        )
        .unwrap();
        assert_eq!(grid.get(0, 0), Rgb::gray(1));
        assert_eq!(grid.get(1, 0), Rgb::gray(2));
        assert_eq!(grid.get(0, 1), Rgb::gray(3));
        assert_eq!(grid.get(1, 1), Rgb::gray(4));
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        let grid = PixelGrid::filled(1, 1, Rgb::BLACK).unwrap();
        grid.get(1, 0);
    }

    #[test]
    fn test_from_fn_and_row() {
        let grid = PixelGrid::from_fn(3, 1, |x, _| Rgb::gray(x as u8 * 10)).unwrap();
        let row: Vec<Rgb> = grid.row(0).collect();
        assert_eq!(row, vec![Rgb::gray(0), Rgb::gray(10), Rgb::gray(20)]);
    }

    #[test]
    fn test_try_from_rgba_drops_alpha() {
        let img = image::RgbaImage::from_pixel(2, 1, image::Rgba([10, 20, 30, 0]));
        let grid = PixelGrid::try_from(image::DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(grid.get(1, 0), Rgb::new(10, 20, 30));
    }
}
