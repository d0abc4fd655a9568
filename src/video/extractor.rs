//! FFmpeg frame extraction for video inputs.
//!
//! Spawns ffmpeg to decode a video into an MJPEG stream on stdout and splits
//! that stream into individual JPEG frames.

use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::boundary::FrameBoundaryParser;
use crate::error::{Result, ViewError};

/// Read size for the ffmpeg stdout pipe.
const READ_CHUNK: usize = 4096;

/// Default extraction rate (frames per second requested from ffmpeg).
pub const DEFAULT_EXTRACT_FPS: u32 = 6;

/// Something that yields encoded frames one at a time.
///
/// `Ok(None)` means the stream ended normally. An `Err` means the source
/// itself broke and no further frames will come.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<Vec<u8>>>;
}

/// In-memory frames, mostly for tests and pre-extracted clips.
impl FrameSource for std::vec::IntoIter<Vec<u8>> {
    fn next_frame(&mut self) -> Result<Option<Vec<u8>>> {
        Ok(self.next())
    }
}

/// Settings for the ffmpeg invocation.
#[derive(Debug, Clone)]
pub struct ExtractorSettings {
    /// ffmpeg executable name or path
    pub ffmpeg: PathBuf,
    /// Frames per second to extract
    pub fps: u32,
    /// Output width in pixels; height follows the source aspect ratio
    pub width: u32,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from("ffmpeg"),
            fps: DEFAULT_EXTRACT_FPS,
            width: 120,
        }
    }
}

impl ExtractorSettings {
    /// Arguments passed to ffmpeg (excluding the executable itself).
    pub fn args(&self, input: &Path) -> Vec<String> {
        vec![
            "-loglevel".into(),
            "error".into(),
            "-i".into(),
            input.to_string_lossy().into_owned(),
            "-vf".into(),
            format!("fps={},scale={}:-1:flags=lanczos", self.fps.max(1), self.width.max(1)),
            "-f".into(),
            "image2pipe".into(),
            "-vcodec".into(),
            "mjpeg".into(),
            "pipe:1".into(),
        ]
    }
}

/// A running ffmpeg process producing JPEG frames.
pub struct FrameExtractor {
    /// The ffmpeg child process
    child: Child,
    stdout: ChildStdout,
    parser: FrameBoundaryParser,
    /// Handle for the stderr reader thread
    stderr_thread: Option<JoinHandle<Vec<String>>>,
    finished: bool,
    /// Frames handed out so far
    emitted: usize,
}

impl FrameExtractor {
    /// Spawn ffmpeg for `input`.
    ///
    /// # Errors
    /// `SourceUnavailable` if the input does not exist or ffmpeg cannot be
    /// started (for instance, when it is not installed).
    pub fn spawn(input: &Path, settings: &ExtractorSettings) -> Result<Self> {
        if !input.exists() {
            return Err(ViewError::SourceUnavailable {
                path: input.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            });
        }

        let args = settings.args(input);
        log::debug!("Spawning {} {}", settings.ffmpeg.display(), args.join(" "));

        let mut child = Command::new(&settings.ffmpeg)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ViewError::SourceUnavailable {
                path: settings.ffmpeg.clone(),
                source: e,
            })?;

        let stdout = match child.stdout.take() {
            Some(s) => s,
            None => {
                let _ = child.kill();
                return Err(ViewError::SourceUnavailable {
                    path: settings.ffmpeg.clone(),
                    source: std::io::Error::other("ffmpeg stdout was not captured"),
                });
            }
        };

        // Spawn a thread to drain stderr so ffmpeg never blocks on it
        let stderr_thread = child.stderr.take().map(|stderr| {
            thread::spawn(move || {
                let reader = BufReader::new(stderr);
                let mut lines = Vec::new();
                for line in reader.lines() {
                    match line {
                        Ok(l) => {
                            log::warn!("[ffmpeg] {}", l);
                            lines.push(l);
                        }
                        Err(_) => break,
                    }
                }
                lines
            })
        });

        Ok(Self {
            child,
            stdout,
            parser: FrameBoundaryParser::new(),
            stderr_thread,
            finished: false,
            emitted: 0,
        })
    }

    fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Stop ffmpeg: SIGINT first, then SIGKILL after a short grace period.
    fn shutdown(&mut self) -> Result<ExitStatus> {
        #[cfg(unix)]
        {
            match libc::pid_t::try_from(self.child.id()) {
                // SAFETY: the pid belongs to a child we spawned and have not reaped.
                Ok(pid) => unsafe {
                    libc::kill(pid, libc::SIGINT);
                },
                Err(_) => {
                    let _ = self.child.kill();
                }
            }
        }

        #[cfg(not(unix))]
        {
            let _ = self.child.kill();
        }

        let start = Instant::now();
        let timeout = Duration::from_secs(2);

        loop {
            match self.child.try_wait()? {
                Some(status) => return Ok(status),
                None => {
                    if start.elapsed() > timeout {
                        let _ = self.child.kill();
                        return Ok(self.child.wait()?);
                    }
                    thread::sleep(Duration::from_millis(50));
                }
            }
        }
    }

    /// Collected stderr lines. Blocks until ffmpeg closes its stderr.
    fn take_stderr_output(&mut self) -> Vec<String> {
        self.stderr_thread
            .take()
            .and_then(|h| h.join().ok())
            .unwrap_or_default()
    }

    /// Called at end of stream. An unsuccessful exit counts as a failure only
    /// when no frame was ever produced; a clip that was played and then hit
    /// a trailing error still ends normally.
    fn check_exit(&mut self) -> Result<()> {
        let status = self.child.wait()?;
        let stderr = self.take_stderr_output();
        if status.success() || self.emitted > 0 {
            if !status.success() {
                log::debug!("ffmpeg exited with {} after {} frames", status, self.emitted);
            }
            return Ok(());
        }
        Err(ViewError::ProcessFailed {
            exit_code: status.code(),
            stderr: stderr.join("\n"),
        })
    }
}

impl FrameSource for FrameExtractor {
    fn next_frame(&mut self) -> Result<Option<Vec<u8>>> {
        let mut buf = [0u8; READ_CHUNK];
        loop {
            if let Some(frame) = self.parser.next_frame() {
                self.emitted += 1;
                return Ok(Some(frame));
            }
            if self.finished {
                return Ok(None);
            }
            match self.stdout.read(&mut buf) {
                Ok(0) => {
                    self.finished = true;
                    if self.parser.in_frame() {
                        log::debug!(
                            "Stream ended inside a frame; dropping {} bytes",
                            self.parser.buffered()
                        );
                    }
                    self.check_exit()?;
                    return Ok(None);
                }
                Ok(n) => self.parser.push(&buf[..n]),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ViewError::Io(e)),
            }
        }
    }
}

impl Drop for FrameExtractor {
    fn drop(&mut self) {
        // Ensure the process is terminated when the extractor is dropped
        if self.is_running() {
            let _ = self.shutdown();
        }
        self.take_stderr_output();
        let _ = self.child.wait();
    }
}
