//! Frame driver: single-image display and the video playback loop.
//!
//! Each frame runs through the same stages, strictly one after another:
//!
//! ```text
//! Idle -> Decoding -> Resampling -> Rendering -> Displaying -+-> Decoding
//!                                                            +-> Terminated
//! ```
//!
//! Playback stops when the frame source is exhausted, when it fails, or when
//! the stop flag is raised (Ctrl+C). A frame whose bytes do not decode is
//! dropped and the loop moves on to the next one.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::ascii::{
    fit_dimensions, resample_with, target_dimensions, PixelGrid, RenderMode, RenderedFrame,
    Renderer, ResampleFilter, DEFAULT_CHAR_ASPECT_RATIO,
};
use crate::error::Result;
use crate::source::decode_frame;
use crate::terminal::{HiddenCursor, CLEAR_SCREEN, CURSOR_HOME, RESET};
use crate::video::FrameSource;

/// Fixed delay between displayed video frames (~10 fps).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Pipeline stage the driver is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Decoding,
    Resampling,
    Rendering,
    Displaying,
    Terminated,
}

/// How frames are sized, sampled, and paced.
#[derive(Debug, Clone)]
pub struct DriverSettings {
    /// Glyph-assembly mode
    pub mode: RenderMode,
    /// Output width in columns (must be at least 1)
    pub width: u32,
    /// Derive rows from the source aspect ratio instead of `width / 2`
    pub fit: bool,
    /// Resampling filter
    pub filter: ResampleFilter,
    /// Delay after each displayed video frame
    pub frame_interval: Duration,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            width: 80,
            fit: false,
            filter: ResampleFilter::default(),
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

/// Counters reported when playback ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Frames written to the terminal
    pub rendered: usize,
    /// Frames dropped because they failed to decode
    pub skipped: usize,
}

/// Runs decoded images through resample, render, and display.
pub struct FrameDriver {
    settings: DriverSettings,
    renderer: Renderer,
    state: DriverState,
    stop: Arc<AtomicBool>,
}

impl FrameDriver {
    pub fn new(settings: DriverSettings, renderer: Renderer) -> Self {
        Self {
            settings,
            renderer,
            state: DriverState::Idle,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share a stop flag (set by the Ctrl+C handler) with the playback loop.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = stop;
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Target grid size for a source image.
    pub fn target_size(&self, source: &PixelGrid) -> Result<(u32, u32)> {
        if self.settings.fit {
            fit_dimensions(
                source.width(),
                source.height(),
                self.settings.width,
                DEFAULT_CHAR_ASPECT_RATIO,
            )
        } else {
            target_dimensions(self.settings.width)
        }
    }

    /// Resample and render one decoded image.
    pub fn render_image(&mut self, image: &PixelGrid) -> Result<RenderedFrame> {
        self.transition(DriverState::Resampling);
        let (width, height) = self.target_size(image)?;
        let target = resample_with(image, width, height, self.settings.filter)?;

        self.transition(DriverState::Rendering);
        Ok(self.renderer.render(&target, self.settings.mode))
    }

    /// Render a single image once and write it to `out`.
    pub fn show_image<W: Write>(&mut self, out: &mut W, image: &PixelGrid) -> Result<()> {
        let result = self.show_image_inner(out, image);
        self.transition(DriverState::Terminated);
        result
    }

    fn show_image_inner<W: Write>(&mut self, out: &mut W, image: &PixelGrid) -> Result<()> {
        let frame = self.render_image(image)?;
        self.transition(DriverState::Displaying);
        out.write_all(frame.to_ansi().as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Play frames from `source` until it ends, fails, or the stop flag is set.
    ///
    /// The cursor is hidden for the duration and restored afterwards, even
    /// when playback ends with an error.
    pub fn play<W, S>(&mut self, out: &mut W, source: &mut S) -> Result<PlaybackStats>
    where
        W: Write,
        S: FrameSource + ?Sized,
    {
        let mut cursor = HiddenCursor::enter(out)?;
        let mut stats = PlaybackStats::default();

        let result = self.play_loop(cursor.get_mut(), source, &mut stats);
        self.transition(DriverState::Terminated);
        let restored = cursor.exit();

        result?;
        restored?;
        log::info!(
            "Playback finished: {} frames rendered, {} skipped",
            stats.rendered,
            stats.skipped
        );
        Ok(stats)
    }

    fn play_loop<W, S>(
        &mut self,
        out: &mut W,
        source: &mut S,
        stats: &mut PlaybackStats,
    ) -> Result<()>
    where
        W: Write,
        S: FrameSource + ?Sized,
    {
        loop {
            if self.stop.load(Ordering::SeqCst) {
                log::info!("Stop requested, ending playback");
                return Ok(());
            }

            self.transition(DriverState::Decoding);
            let Some(bytes) = source.next_frame()? else {
                log::debug!("Frame source exhausted");
                return Ok(());
            };

            let image = match decode_frame(&bytes) {
                Ok(image) => image,
                Err(e) => {
                    log::debug!(
                        "Skipping frame {}: {}",
                        stats.rendered + stats.skipped,
                        e
                    );
                    stats.skipped += 1;
                    continue;
                }
            };

            let frame = self.render_image(&image)?;

            self.transition(DriverState::Displaying);
            write_video_frame(out, &frame, self.settings.mode)?;
            stats.rendered += 1;

            if !self.settings.frame_interval.is_zero() {
                thread::sleep(self.settings.frame_interval);
            }
        }
    }

    fn transition(&mut self, next: DriverState) {
        log::trace!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Draw one video frame over the previous one.
///
/// Block mode clears the whole screen first; its space-only cells otherwise
/// leave stale background colors behind when the frame shrinks.
fn write_video_frame<W: Write>(out: &mut W, frame: &RenderedFrame, mode: RenderMode) -> io::Result<()> {
    let mut buf = String::with_capacity(frame.lines().iter().map(|l| l.len() + 1).sum::<usize>() + 16);
    if mode == RenderMode::Block {
        buf.push_str(CLEAR_SCREEN);
    }
    buf.push_str(CURSOR_HOME);
    buf.push_str(&frame.to_ansi());
    buf.push_str(RESET);
    out.write_all(buf.as_bytes())?;
    out.flush()
}

/// Set up the Ctrl+C handler.
///
/// The handler only raises `stop`; the playback loop notices it before the
/// next frame and restores the terminal. This should be called once at
/// program startup.
pub fn setup_ctrlc_handler(stop: Arc<AtomicBool>) -> std::result::Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        stop.store(true, Ordering::SeqCst);
    })
}
