//! Configuration file handling for ascii-view.
//!
//! Loads configuration from `<config dir>/ascii-view/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for ascii-view.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub video: VideoConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct RenderConfig {
    /// Render mode name (ascii, blocks, halfblocks)
    #[serde(default)]
    pub mode: Option<String>,
    /// Named glyph ramp
    #[serde(default)]
    pub charset: Option<String>,
    /// Custom glyph ramp; overrides `charset`
    #[serde(default)]
    pub glyphs: Option<String>,
    /// Resampling filter (nearest, average)
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub fit: bool,
    /// Output width; 0 means auto
    #[serde(default)]
    pub width: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VideoConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_extract_fps")]
    pub extract_fps: u32,
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            extract_fps: default_extract_fps(),
            ffmpeg: default_ffmpeg(),
        }
    }
}

fn default_interval_ms() -> u64 {
    100
}

fn default_extract_fps() -> u32 {
    6
}

fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

/// Commented default config written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# ascii-view configuration

[render]
# Render mode: ascii, blocks, halfblocks
mode = "ascii"
# Glyph ramp for ascii mode: detailed, classic, standard, blocks
charset = "detailed"
# Custom glyph ramp, least to most intense (overrides charset)
# glyphs = " .:-=+*#%@"
# Resampling filter: nearest, average
filter = "nearest"
# Keep the source aspect ratio instead of width/2 rows
fit = false
# Output width in columns (0 = terminal width - 2)
width = 0

[video]
# Delay between displayed frames in milliseconds
interval_ms = 100
# Frames per second extracted by ffmpeg
extract_fps = 6
# ffmpeg executable
ffmpeg = "ffmpeg"
"#;

impl Config {
    /// Load configuration from the default path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-view").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-view/config.toml")
        })
}
