//! CLI enum types for render mode, character set, and filter options.

use clap::ValueEnum;

use crate::ascii::{self, RenderMode, ResampleFilter};

/// Render mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Colored glyphs picked by brightness
    #[default]
    #[value(aliases = ["character", "char"])]
    Ascii,
    /// Colored background cells
    #[value(alias = "block")]
    Blocks,
    /// Upper-half blocks, two pixel rows per line
    #[value(aliases = ["half-block", "half-blocks", "halfblock"])]
    Halfblocks,
}

impl From<Mode> for RenderMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Ascii => RenderMode::Character,
            Mode::Blocks => RenderMode::Block,
            Mode::Halfblocks => RenderMode::HalfBlock,
        }
    }
}

/// Glyph ramp for ascii mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Detailed,
    Classic,
    Standard,
    Blocks,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Detailed => ascii::CharSet::Detailed,
            CharacterSet::Classic => ascii::CharSet::Classic,
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
        }
    }
}

/// Resampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    #[default]
    Nearest,
    Average,
}

impl From<Filter> for ResampleFilter {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => ResampleFilter::Nearest,
            Filter::Average => ResampleFilter::Average,
        }
    }
}
