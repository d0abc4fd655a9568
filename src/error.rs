//! Error types shared by the rendering pipeline.

use std::path::PathBuf;

/// Errors that can occur while loading, resampling, or rendering frames.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The input file extension is not a known image or video format
    #[error("unsupported file extension: {extension:?}")]
    UnsupportedFormat { extension: String },

    /// Image or frame bytes are malformed or truncated
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// A grid dimension was zero
    #[error("invalid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: u32, height: u32 },

    /// The requested render mode name is not recognized
    #[error("unsupported render mode '{0}'. Available modes: ascii, blocks, halfblocks")]
    UnsupportedMode(String),

    /// A config or CLI value is outside its allowed set
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// A glyph ramp must contain at least one character
    #[error("glyph ramp '{0}' is empty or unknown")]
    InvalidRamp(String),

    /// The input path cannot be opened, or the frame extractor cannot be spawned
    #[error("cannot open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// ffmpeg exited unsuccessfully without producing a single frame
    #[error("ffmpeg exited with code {exit_code:?}\n{stderr}")]
    ProcessFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    /// Writing to the terminal or reading the frame pipe failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ViewError>;
