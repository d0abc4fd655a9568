//! Incremental JPEG frame splitter for an MJPEG byte stream.
//!
//! ffmpeg's `image2pipe` output is a plain concatenation of JPEG files. Reads
//! from the pipe arrive in arbitrary chunks, so a frame (or one of its
//! two-byte markers) may be split across reads. The parser appends every
//! chunk to one buffer and walks a small state machine over it:
//!
//! ```text
//! SeekingStart --SOI found--> SeekingEnd --EOI found--> emit frame --> SeekingStart
//! ```
//!
//! Bytes after an emitted frame stay in the buffer for the next frame.

/// JPEG start-of-image marker.
pub const SOI: [u8; 2] = [0xFF, 0xD8];
/// JPEG end-of-image marker.
pub const EOI: [u8; 2] = [0xFF, 0xD9];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for SOI at or after `scan_from`
    SeekingStart,
    /// SOI found at `start`; looking for EOI at or after `scan_from`
    SeekingEnd { start: usize },
}

/// Splits a stream of bytes into complete JPEG frames.
#[derive(Debug)]
pub struct FrameBoundaryParser {
    buf: Vec<u8>,
    state: ScanState,
    scan_from: usize,
}

impl Default for FrameBoundaryParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBoundaryParser {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            state: ScanState::SeekingStart,
            scan_from: 0,
        }
    }

    /// Append a chunk read from the stream.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Number of bytes currently held.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// True while a frame has started but its end has not arrived yet.
    pub fn in_frame(&self) -> bool {
        matches!(self.state, ScanState::SeekingEnd { .. })
    }

    /// Pop the next complete frame (SOI through EOI inclusive), if any.
    ///
    /// Call repeatedly after each `push` until it returns `None`; one chunk
    /// may complete several frames.
    pub fn next_frame(&mut self) -> Option<Vec<u8>> {
        loop {
            match self.state {
                ScanState::SeekingStart => match find(&self.buf, self.scan_from, &SOI) {
                    Some(start) => {
                        self.state = ScanState::SeekingEnd { start };
                        self.scan_from = start + SOI.len();
                    }
                    None => {
                        self.discard_junk();
                        return None;
                    }
                },
                ScanState::SeekingEnd { start } => match find(&self.buf, self.scan_from, &EOI) {
                    Some(end) => {
                        let stop = end + EOI.len();
                        let frame = self.buf[start..stop].to_vec();
                        self.buf.drain(..stop);
                        self.state = ScanState::SeekingStart;
                        self.scan_from = 0;
                        return Some(frame);
                    }
                    None => {
                        // Rescan the last byte: it may be the first half of EOI
                        self.scan_from = self.buf.len().saturating_sub(1).max(start + SOI.len());
                        return None;
                    }
                },
            }
        }
    }

    /// Drop bytes that cannot belong to a frame, keeping a trailing 0xFF
    /// that may start a split SOI marker.
    fn discard_junk(&mut self) {
        let keep_from = match self.buf.last() {
            Some(&0xFF) => self.buf.len() - 1,
            _ => self.buf.len(),
        };
        self.buf.drain(..keep_from);
        self.scan_from = 0;
    }
}

/// Position of `needle` in `haystack` at or after `from`.
fn find(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}
