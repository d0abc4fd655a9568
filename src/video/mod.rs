//! Video frame extraction.
//!
//! - [`FrameExtractor`] runs ffmpeg and yields JPEG frames
//! - [`FrameBoundaryParser`] splits the MJPEG byte stream into frames
//! - [`FrameSource`] is what the frame driver pulls from

mod boundary;
mod extractor;

pub use boundary::{FrameBoundaryParser, EOI, SOI};
pub use extractor::{ExtractorSettings, FrameExtractor, FrameSource, DEFAULT_EXTRACT_FPS};
