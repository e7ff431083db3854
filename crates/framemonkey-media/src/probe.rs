//! Media file probing to get the duration without decoding.

use framemonkey_core::{sanitize_seconds, FrameMonkeyError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Information about a media file.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaProbe {
    /// File path
    pub path: PathBuf,
    /// Duration in seconds, `0.0` when the container does not report one
    pub duration_seconds: f64,
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    format: Option<ProbeFormat>,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    #[serde(default)]
    duration: Option<String>,
}

impl MediaProbe {
    /// Whether `ffprobe` can be found on `PATH`.
    pub fn is_available() -> bool {
        which::which("ffprobe").is_ok()
    }

    /// Probe a media file with ffprobe.
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(FrameMonkeyError::NotFound(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let output = Command::new("ffprobe")
            .args(["-v", "error", "-show_entries", "format=duration", "-of", "json"])
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| FrameMonkeyError::Probe(format!("Failed to run ffprobe: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FrameMonkeyError::Probe(format!(
                "ffprobe exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let json = String::from_utf8_lossy(&output.stdout);
        debug!(json_len = json.len(), "Parsing ffprobe output");
        let duration_seconds = parse_probe_json(&json)?;

        info!(path = %path.display(), duration_seconds, "Probed media");
        Ok(Self {
            path: path.to_path_buf(),
            duration_seconds,
        })
    }
}

/// Extract the container duration from `ffprobe -of json` output.
fn parse_probe_json(json: &str) -> Result<f64> {
    let parsed: ProbeOutput = serde_json::from_str(json)
        .map_err(|e| FrameMonkeyError::Probe(format!("Failed to parse ffprobe JSON: {e}")))?;

    let raw = parsed
        .format
        .and_then(|f| f.duration)
        .ok_or_else(|| FrameMonkeyError::Probe("ffprobe reported no duration".into()))?;

    let seconds: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FrameMonkeyError::Probe(format!("Unparsable duration: {raw}")))?;

    Ok(sanitize_seconds(seconds))
}
