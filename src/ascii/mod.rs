//! Image-to-text renderer.
//!
//! This module provides the pipeline that turns a decoded image into
//! escape-coded terminal text:
//!
//! 1. **Resampling** - Map the source onto the target character grid
//! 2. **Luminance** - BT.601 luma picks a glyph from a ramp
//! 3. **Rendering** - Assemble colored glyphs per mode (character, block,
//!    half-block)
//!
//! # Glyph Ramps
//!
//! Character mode picks glyphs from a [`GlyphRamp`]. Named ramps are
//! available via [`CharSet`]:
//! - `Detailed` - 68-level ramp (default)
//! - `Classic` - 16-level ramp
//! - `Standard` - 10-level ASCII ramp
//! - `Blocks` - Unicode shade blocks

mod charset;
mod dimensions;
mod downsample;
mod luminance;
mod pixel;
mod render;

pub use charset::{
    CharSet, GlyphRamp, BLOCKS_RAMP, CLASSIC_RAMP, DETAILED_RAMP, STANDARD_RAMP,
};
pub use dimensions::{fit_dimensions, target_dimensions, DEFAULT_CHAR_ASPECT_RATIO};
pub use downsample::{resample, resample_average, resample_with, ResampleFilter};
pub use luminance::{luminance, luminance_index};
pub use pixel::{PixelGrid, Rgb};
pub use render::{RenderMode, RenderedFrame, Renderer, RESET, UPPER_HALF_BLOCK};
