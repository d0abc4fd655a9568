//! Frame-to-text rendering with 24-bit ANSI colors.
//!
//! Three glyph-assembly modes share one renderer:
//! - **Character**: foreground-colored glyph picked from a luminance ramp
//! - **Block**: background-colored space, one grid cell per terminal cell
//! - **Half-block**: `▀` with the upper row as foreground and the lower row as
//!   background, so one terminal row shows two grid rows

use std::fmt;
use std::str::FromStr;

use super::charset::GlyphRamp;
use super::luminance::luminance_index;
use super::pixel::{PixelGrid, Rgb};
use crate::error::ViewError;

/// SGR reset. Terminates every rendered line.
pub const RESET: &str = "\x1b[0m";

/// Upper half block glyph used by half-block mode.
pub const UPPER_HALF_BLOCK: char = '▀';

/// Glyph-assembly algorithm applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Luminance ramp glyphs with a true-color foreground
    #[default]
    Character,
    /// Colored background cells
    Block,
    /// Two grid rows per terminal row
    HalfBlock,
}

impl RenderMode {
    /// Canonical name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::Character => "ascii",
            RenderMode::Block => "blocks",
            RenderMode::HalfBlock => "halfblocks",
        }
    }

    /// Number of output lines produced for a grid with `grid_rows` rows.
    pub fn line_count(&self, grid_rows: u32) -> usize {
        match self {
            RenderMode::Character | RenderMode::Block => grid_rows as usize,
            RenderMode::HalfBlock => grid_rows.div_ceil(2) as usize,
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderMode {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascii" | "character" | "char" => Ok(RenderMode::Character),
            "blocks" | "block" => Ok(RenderMode::Block),
            "halfblocks" | "halfblock" | "half-block" | "half-blocks" => {
                Ok(RenderMode::HalfBlock)
            }
            _ => Err(ViewError::UnsupportedMode(s.to_string())),
        }
    }
}

/// Escape-coded text for one frame.
///
/// Each line is a run of (escape sequence, glyph) pairs and always ends with
/// [`RESET`]. The line separator is not stored; [`RenderedFrame::to_ansi`]
/// appends `\n` after every line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedFrame {
    lines: Vec<String>,
}

impl RenderedFrame {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Full output buffer: every line followed by a newline.
    pub fn to_ansi(&self) -> String {
        let len: usize = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = String::with_capacity(len);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for RenderedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Converts grids to escape-coded text.
///
/// The glyph ramp is fixed at construction, so two renderers with different
/// ramps can run side by side.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    ramp: GlyphRamp,
}

impl Renderer {
    pub fn new(ramp: GlyphRamp) -> Self {
        Self { ramp }
    }

    /// Render a grid in the given mode.
    pub fn render(&self, grid: &PixelGrid, mode: RenderMode) -> RenderedFrame {
        let lines = match mode {
            RenderMode::Character => self.render_character(grid),
            RenderMode::Block => render_block(grid),
            RenderMode::HalfBlock => render_half_block(grid),
        };
        debug_assert_eq!(lines.len(), mode.line_count(grid.height()));
        RenderedFrame { lines }
    }

    fn render_character(&self, grid: &PixelGrid) -> Vec<String> {
        let levels = self.ramp.len();
        (0..grid.height())
            .map(|y| {
                let mut line = line_buffer(grid.width());
                for c in grid.row(y) {
                    push_fg(&mut line, c);
                    line.push(self.ramp.glyph(luminance_index(c.r, c.g, c.b, levels)));
                }
                line.push_str(RESET);
                line
            })
            .collect()
    }
}

fn render_block(grid: &PixelGrid) -> Vec<String> {
    (0..grid.height())
        .map(|y| {
            let mut line = line_buffer(grid.width());
            for c in grid.row(y) {
                push_bg(&mut line, c);
                line.push(' ');
            }
            line.push_str(RESET);
            line
        })
        .collect()
}

fn render_half_block(grid: &PixelGrid) -> Vec<String> {
    let height = grid.height();
    (0..height)
        .step_by(2)
        .map(|y| {
            let mut line = line_buffer(grid.width());
            if y + 1 < height {
                for x in 0..grid.width() {
                    push_bg(&mut line, grid.get(x, y + 1));
                    push_fg(&mut line, grid.get(x, y));
                    line.push(UPPER_HALF_BLOCK);
                }
            } else {
                // Odd row count: no lower row to pair with
                for c in grid.row(y) {
                    push_fg(&mut line, c);
                    line.push(UPPER_HALF_BLOCK);
                }
            }
            line.push_str(RESET);
            line
        })
        .collect()
}

/// Roughly two escapes plus a glyph per cell.
fn line_buffer(width: u32) -> String {
    String::with_capacity(width as usize * 40 + RESET.len())
}

/// ANSI true color (24-bit) foreground: ESC[38;2;R;G;Bm
#[inline]
fn push_fg(out: &mut String, c: Rgb) {
    out.push_str(&format!("\x1b[38;2;{};{};{}m", c.r, c.g, c.b));
}

/// ANSI true color (24-bit) background: ESC[48;2;R;G;Bm
#[inline]
fn push_bg(out: &mut String, c: Rgb) {
    out.push_str(&format!("\x1b[48;2;{};{};{}m", c.r, c.g, c.b));
}
