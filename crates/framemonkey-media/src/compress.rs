//! Compression job for the external compression script.
//!
//! The script is a separate program; this module only formats its
//! arguments, launches it and relays its output lines. Timestamps are
//! passed as `HH:MM:SS.mmm`, the format the script's parser expects.

use crossbeam_channel::{unbounded, Receiver, Sender};
use framemonkey_core::{format_timestamp, FrameMonkeyError, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use tracing::{info, warn};

/// Fastest, lowest quality encoder speed.
pub const MIN_SPEED: u8 = 1;
/// Slowest, highest quality encoder speed.
pub const MAX_SPEED: u8 = 6;

// ── Options ──────────────────────────────────────────────────────

/// User-facing quality options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressOptions {
    /// Only encode the selected trim range.
    pub trim: bool,
    /// Encode in two passes.
    pub two_pass: bool,
    /// Enable hardware acceleration.
    pub hw_accel: bool,
    /// Target output size in megabytes.
    pub target_size_mb: f64,
    /// 1 = fast and poor, 6 = slow and good.
    pub speed: u8,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            trim: true,
            two_pass: false,
            hw_accel: false,
            target_size_mb: 8.0,
            speed: 3,
        }
    }
}

// ── Job ──────────────────────────────────────────────────────────

/// One invocation of the compression script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressJob {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Trim bounds in seconds (None = whole file).
    pub range: Option<(f64, f64)>,
    pub options: CompressOptions,
}

impl CompressJob {
    /// Create a job covering the whole input.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, options: CompressOptions) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            range: None,
            options,
        }
    }

    /// Restrict the job to `start..end` seconds.
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.range = Some((start, end));
        self
    }

    /// Check the job before launching anything.
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(FrameMonkeyError::InvalidParameter("No input file selected".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(FrameMonkeyError::InvalidParameter("Output file name is required".into()));
        }
        if self.output == self.input {
            return Err(FrameMonkeyError::InvalidParameter(
                "Output file must differ from the input".into(),
            ));
        }
        let size = self.options.target_size_mb;
        if !size.is_finite() || size <= 0.0 {
            return Err(FrameMonkeyError::InvalidParameter(format!(
                "Size must be greater than 0 MB, got {size}"
            )));
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.options.speed) {
            return Err(FrameMonkeyError::InvalidParameter(format!(
                "Quality must be between {MIN_SPEED} and {MAX_SPEED}, got {}",
                self.options.speed
            )));
        }
        if let Some((start, end)) = self.range {
            if end <= start {
                return Err(FrameMonkeyError::InvalidParameter(format!(
                    "End time {} must be after start time {}",
                    format_timestamp(end),
                    format_timestamp(start)
                )));
            }
        }
        Ok(())
    }

    /// Build the script arguments.
    pub fn script_args(&self) -> Vec<String> {
        let mut args = vec![
            "--input".to_string(),
            self.input.to_string_lossy().into_owned(),
            "--output".to_string(),
            self.output.to_string_lossy().into_owned(),
        ];

        if let Some((start, end)) = self.range {
            args.extend([
                "--start".to_string(),
                format_timestamp(start),
                "--end".to_string(),
                format_timestamp(end),
            ]);
        }

        args.extend([
            "--size".to_string(),
            self.options.target_size_mb.to_string(),
            "--speed".to_string(),
            self.options.speed.to_string(),
        ]);

        if self.options.two_pass {
            args.push("--two-pass".to_string());
        }
        if self.options.hw_accel {
            args.push("--hwaccel".to_string());
        }

        args
    }

    /// Validate and launch the script.
    pub fn spawn(&self, program: &Path) -> Result<CompressHandle> {
        self.validate()?;

        let args = self.script_args();
        info!(program = %program.display(), ?args, "Launching compression");

        let mut child = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                FrameMonkeyError::Compress(format!(
                    "Failed to spawn {}: {e}",
                    program.display()
                ))
            })?;

        let (tx, rx) = unbounded();
        if let Some(stdout) = child.stdout.take() {
            forward_lines(stdout, tx.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            forward_lines(stderr, tx);
        }

        Ok(CompressHandle {
            child,
            lines: rx,
            status: None,
        })
    }
}

fn forward_lines<R: Read + Send + 'static>(stream: R, tx: Sender<String>) {
    std::thread::spawn(move || {
        for line in BufReader::new(stream).lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Compression output unreadable: {e}");
                    break;
                }
            }
        }
    });
}

/// Suggested output path: `<stem>_compressed.<ext>` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mp4".to_string());
    input.with_file_name(format!("{stem}_compressed.{ext}"))
}

// ── Running process ─────────────────────────────────────────────

/// Something observed from the running script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressEvent {
    /// One line of stdout or stderr.
    Output(String),
    /// The process exited.
    Finished { success: bool, code: Option<i32> },
}

/// Handle to a launched compression process.
#[derive(Debug)]
pub struct CompressHandle {
    child: Child,
    lines: Receiver<String>,
    status: Option<ExitStatus>,
}

impl CompressHandle {
    /// OS process id.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Drain output lines and check for exit without blocking.
    ///
    /// `Finished` is reported once.
    pub fn poll(&mut self) -> Result<Vec<CompressEvent>> {
        let mut events: Vec<CompressEvent> =
            self.lines.try_iter().map(CompressEvent::Output).collect();

        if self.status.is_none() {
            if let Some(status) = self.child.try_wait()? {
                info!(%status, "Compression finished");
                self.status = Some(status);
                events.push(CompressEvent::Finished {
                    success: status.success(),
                    code: status.code(),
                });
            }
        }

        Ok(events)
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_some()
    }

    /// Kill the process if it is still running.
    pub fn kill(&mut self) -> Result<()> {
        if self.status.is_none() {
            self.child.kill()?;
            let status = self.child.wait()?;
            warn!(%status, "Compression killed");
            self.status = Some(status);
        }
        Ok(())
    }
}

impl Drop for CompressHandle {
    fn drop(&mut self) {
        if self.status.is_none() {
            if let Err(e) = self.kill() {
                warn!("Failed to stop compression on drop: {e}");
            }
        }
    }
}
