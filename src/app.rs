//! Settings resolution and the top-level run entry point.
//!
//! Settings come from three layers: CLI flags, then the config file, then
//! built-in defaults.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use crate::ascii::{target_dimensions, CharSet, GlyphRamp, RenderMode, Renderer, ResampleFilter};
use crate::cli::Args;
use crate::config::Config;
use crate::driver::{setup_ctrlc_handler, DriverSettings, FrameDriver};
use crate::error::{Result, ViewError};
use crate::source::{open_image, MediaKind};
use crate::terminal::resolve_width;
use crate::video::{ExtractorSettings, FrameExtractor};

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub mode: RenderMode,
    pub ramp: GlyphRamp,
    pub filter: ResampleFilter,
    pub fit: bool,
    /// Requested width; 0 means terminal width minus the margin
    pub width: u32,
    pub frame_interval: Duration,
    pub extract_fps: u32,
    pub ffmpeg: PathBuf,
}

impl RunOptions {
    /// Merge CLI args over the config file over built-in defaults.
    ///
    /// Config values are plain strings, so an unknown mode, charset, or
    /// filter name there is reported here rather than by clap.
    pub fn resolve(args: &Args, cfg: &Config) -> Result<Self> {
        let input = args.input.clone().ok_or_else(|| {
            ViewError::InvalidSetting("no input file given (use --input <path>)".to_string())
        })?;

        // Mode: CLI > config > default (ascii)
        let mode = match (args.mode, cfg.render.mode.as_deref()) {
            (Some(m), _) => m.into(),
            (None, Some(name)) => name.parse()?,
            (None, None) => RenderMode::default(),
        };

        // Ramp: CLI glyphs > CLI charset > config glyphs > config charset > detailed
        let ramp = if let Some(glyphs) = args.glyphs.as_deref() {
            GlyphRamp::new(glyphs)?
        } else if let Some(charset) = args.charset {
            CharSet::from(charset).ramp()
        } else if let Some(glyphs) = cfg.render.glyphs.as_deref() {
            GlyphRamp::new(glyphs)?
        } else if let Some(name) = cfg.render.charset.as_deref() {
            name.parse::<CharSet>()?.ramp()
        } else {
            GlyphRamp::default()
        };

        let filter = match (args.filter, cfg.render.filter.as_deref()) {
            (Some(f), _) => f.into(),
            (None, Some(name)) => name.parse()?,
            (None, None) => ResampleFilter::default(),
        };

        if cfg.video.extract_fps == 0 {
            return Err(ViewError::InvalidSetting(
                "video.extract_fps must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            input,
            mode,
            ramp,
            filter,
            fit: args.fit || cfg.render.fit,
            width: args.width.unwrap_or(cfg.render.width),
            frame_interval: Duration::from_millis(args.interval.unwrap_or(cfg.video.interval_ms)),
            extract_fps: cfg.video.extract_fps,
            ffmpeg: PathBuf::from(&cfg.video.ffmpeg),
        })
    }

    fn driver_settings(&self, width: u32) -> DriverSettings {
        DriverSettings {
            mode: self.mode,
            width,
            fit: self.fit,
            filter: self.filter,
            frame_interval: self.frame_interval,
        }
    }
}

/// Render the input to stdout.
pub fn run(opts: &RunOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(opts, &mut out)
}

/// Render the input to `out`.
///
/// Images are drawn once. Videos are streamed through ffmpeg until the clip
/// ends or Ctrl+C is pressed.
pub fn run_with<W: Write>(opts: &RunOptions, out: &mut W) -> Result<()> {
    run_at_width(opts, resolve_width(opts.width), out)
}

fn run_at_width<W: Write>(opts: &RunOptions, width: u32, out: &mut W) -> Result<()> {
    let kind = MediaKind::from_path(&opts.input)?;
    // A zero width must fail here, before ffmpeg is started
    target_dimensions(width)?;
    log::info!(
        "Rendering {} as {} at width {}",
        opts.input.display(),
        opts.mode,
        width
    );

    let driver = FrameDriver::new(opts.driver_settings(width), Renderer::new(opts.ramp.clone()));

    match kind {
        MediaKind::Image(_) => {
            let image = open_image(&opts.input)?;
            let mut driver = driver;
            driver.show_image(out, &image)
        }
        MediaKind::Video => {
            let settings = ExtractorSettings {
                ffmpeg: opts.ffmpeg.clone(),
                fps: opts.extract_fps,
                width,
            };
            let mut extractor = FrameExtractor::spawn(&opts.input, &settings)?;

            let stop = Arc::new(AtomicBool::new(false));
            if let Err(e) = setup_ctrlc_handler(Arc::clone(&stop)) {
                log::warn!("Failed to install Ctrl+C handler: {}", e);
            }

            let mut driver = driver.with_stop_flag(stop);
            let stats = driver.play(out, &mut extractor)?;
            if stats.rendered == 0 {
                log::warn!("No frames were rendered from {}", opts.input.display());
            }
            Ok(())
        }
    }
}
