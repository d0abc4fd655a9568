//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, Filter, Mode};

/// Render images and videos as true-color text in the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-view")]
#[command(version, about = "Render images and videos as true-color text in the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    ascii-view --input photo.jpg
    ascii-view -i photo.png --mode halfblocks --width 100
    ascii-view -i clip.mp4 --mode blocks")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image or video file (jpg, jpeg, png, webp, mp4, mov, avi, mkv, webm)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Render mode [default: ascii]
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Width in columns (0 = terminal width - 2)
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Glyph ramp for ascii mode [default: detailed]
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom glyph ramp, least to most intense (overrides --charset)
    #[arg(long)]
    pub glyphs: Option<String>,

    /// Resampling filter [default: nearest]
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Keep the source aspect ratio instead of width/2 rows
    #[arg(long)]
    pub fit: bool,

    /// Delay between video frames in milliseconds [default: 100]
    #[arg(long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
