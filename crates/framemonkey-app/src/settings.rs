//! Persistent user settings.

use framemonkey_core::{FrameMonkeyError, Result};
use framemonkey_media::CompressOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Names tried on `PATH` for the compression script.
const COMPRESSOR_CANDIDATES: &[&str] = &["framemonkey-compress", "compress.py"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Program launched to compress the video.
    pub compressor_program: PathBuf,
    /// Last used quality options.
    pub options: CompressOptions,
    /// Directory the file picker opens in.
    pub last_directory: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            compressor_program: find_compressor(),
            options: CompressOptions::default(),
            last_directory: dirs::home_dir(),
        }
    }
}

/// Search `PATH` for the compression script.
pub fn find_compressor() -> PathBuf {
    for name in COMPRESSOR_CANDIDATES {
        if let Ok(path) = which::which(name) {
            return path;
        }
    }
    PathBuf::from(COMPRESSOR_CANDIDATES[0])
}

impl Settings {
    /// Default settings file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("framemonkey")
            .join("settings.json")
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| {
            FrameMonkeyError::Settings(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    /// Load settings, falling back to defaults if the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            warn!("Ignoring settings: {e}");
            Self::default()
        })
    }

    /// Save settings to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| FrameMonkeyError::Settings(format!("Failed to serialize settings: {e}")))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }
}
