//! ffmpeg exit-status handling, driven by stand-in shell scripts.
//!
//! The scenarios run in one test: writing an executable while another test
//! thread forks can make exec fail with "text file busy".

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use ascii_view::app::{run_with, RunOptions};
use ascii_view::ascii::{GlyphRamp, RenderMode, ResampleFilter};
use ascii_view::terminal::CURSOR_HOME;
use ascii_view::video::{ExtractorSettings, FrameExtractor};
use ascii_view::ViewError;

fn fake_ffmpeg(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn options(input: PathBuf, ffmpeg: PathBuf) -> RunOptions {
    RunOptions {
        input,
        mode: RenderMode::Character,
        ramp: GlyphRamp::default(),
        filter: ResampleFilter::Nearest,
        fit: false,
        width: 10,
        frame_interval: Duration::ZERO,
        extract_fps: 6,
        ffmpeg,
    }
}

#[test]
fn test_ffmpeg_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    let clip = dir.path().join("clip.mp4");
    std::fs::write(&clip, b"not really a video").unwrap();

    // Undecodable input: no frames and a non-zero exit is fatal
    let failing = fake_ffmpeg(
        dir.path(),
        "ffmpeg-fail",
        "echo 'clip.mp4: Invalid data found when processing input' >&2\nexit 1",
    );
    let mut out = Vec::new();
    match run_with(&options(clip.clone(), failing), &mut out) {
        Err(ViewError::ProcessFailed { exit_code, stderr }) => {
            assert_eq!(exit_code, Some(1));
            assert!(stderr.contains("Invalid data found"));
        }
        Err(e) => panic!("Expected ProcessFailed, got {}", e),
        Ok(()) => panic!("Expected ProcessFailed, got Ok"),
    }
    assert!(!String::from_utf8(out).unwrap().contains(CURSOR_HOME));

    // Empty clip with a clean exit ends normally
    let empty = fake_ffmpeg(dir.path(), "ffmpeg-empty", "exit 0");
    let mut out = Vec::new();
    run_with(&options(clip.clone(), empty), &mut out).unwrap();

    // Frames were produced, so a trailing error does not fail the run
    let frame = dir.path().join("frame.jpg");
    image::RgbImage::from_pixel(20, 20, image::Rgb([120, 60, 200]))
        .save(&frame)
        .unwrap();
    let trailing = fake_ffmpeg(
        dir.path(),
        "ffmpeg-trailing",
        &format!("cat '{}'\necho 'error at end of stream' >&2\nexit 1", frame.display()),
    );
    let mut out = Vec::new();
    run_with(&options(clip.clone(), trailing), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches(CURSOR_HOME).count(), 1);

    // Dropping the extractor interrupts an ffmpeg that is still running
    let stalled = fake_ffmpeg(dir.path(), "ffmpeg-stalled", "exec sleep 30");
    let settings = ExtractorSettings {
        ffmpeg: stalled,
        ..Default::default()
    };
    let extractor = FrameExtractor::spawn(&clip, &settings).unwrap();
    let start = Instant::now();
    drop(extractor);
    assert!(start.elapsed() < Duration::from_secs(10));
}
