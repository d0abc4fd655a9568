//! Glyph ramps for character-mode rendering.

use std::str::FromStr;

use crate::error::ViewError;

/// Detailed density ramp (68 levels).
/// Characters ordered from least visual weight (space) to most ($).
pub const DETAILED_RAMP: &str =
    " .'`^\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Classic 16-level ramp.
pub const CLASSIC_RAMP: &str = " .:!/r(lZ4H9W8$@";

/// Standard ASCII density ramp (10 levels).
/// Works well on dark terminals.
pub const STANDARD_RAMP: &str = " .:-=+*#%@";

/// Shade block ramp (5 levels).
pub const BLOCKS_RAMP: &str = " ░▒▓█";

/// An ordered, non-empty sequence of glyphs from least to most intense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from a string of glyphs.
    ///
    /// Returns `InvalidRamp` for an empty string.
    pub fn new(glyphs: &str) -> Result<Self, ViewError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(ViewError::InvalidRamp(String::new()));
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at `index`, clamped to the last glyph.
    #[inline]
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }

    /// Least intense glyph.
    pub fn first(&self) -> char {
        self.glyphs[0]
    }

    /// Most intense glyph.
    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }

    pub fn as_chars(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        CharSet::default().ramp()
    }
}

/// Named glyph ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// 68-level ramp for photographic detail
    #[default]
    Detailed,
    /// 16-level ramp
    Classic,
    /// 10-level ASCII ramp
    Standard,
    /// Unicode shade blocks
    Blocks,
}

impl CharSet {
    /// Glyphs for this charset as a string.
    pub fn glyphs(&self) -> &'static str {
        match self {
            CharSet::Detailed => DETAILED_RAMP,
            CharSet::Classic => CLASSIC_RAMP,
            CharSet::Standard => STANDARD_RAMP,
            CharSet::Blocks => BLOCKS_RAMP,
        }
    }

    /// Build the ramp for this charset.
    pub fn ramp(&self) -> GlyphRamp {
        GlyphRamp {
            glyphs: self.glyphs().chars().collect(),
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Detailed => "detailed",
            CharSet::Classic => "classic",
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
        }
    }
}

impl FromStr for CharSet {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(CharSet::Detailed),
            "classic" => Ok(CharSet::Classic),
            "standard" => Ok(CharSet::Standard),
            "blocks" => Ok(CharSet::Blocks),
            _ => Err(ViewError::InvalidRamp(s.to_string())),
        }
    }
}
