//! Clip lookup: maps a logical clip name to an audio file on disk.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Clip played when the hook is invoked without a name.
pub const DEFAULT_CLIP: &str = "task_complete";

/// Extensions tried in order. The first existing file wins, regardless of
/// which formats are also present.
pub const EXTENSIONS: [&str; 4] = [".mp3", ".aiff", ".wav", ".m4a"];

/// Logical clip name, independent of file extension. Kept as an `OsString`
/// so any legal filename is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRequest {
    pub base_name: OsString,
}

impl ClipRequest {
    /// Use `arg` when present and non-empty, otherwise `default`.
    pub fn from_arg(arg: Option<&OsStr>, default: &str) -> Self {
        let base_name = match arg {
            Some(name) if !name.is_empty() => name.to_os_string(),
            _ => OsString::from(default),
        };
        ClipRequest { base_name }
    }

    /// Name for display; invalid unicode is replaced.
    pub fn display_name(&self) -> String {
        self.base_name.to_string_lossy().into_owned()
    }

    /// Human-readable search pattern, e.g. `alert.[mp3|aiff|wav|m4a]`.
    pub fn pattern(&self) -> String {
        let exts: Vec<&str> = EXTENSIONS
            .iter()
            .map(|e| e.trim_start_matches('.'))
            .collect();
        format!("{}.[{}]", self.display_name(), exts.join("|"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipLocation {
    pub path: PathBuf,
    pub extension: &'static str,
}

/// Find the first `<audio_dir>/<name><ext>` that exists.
pub fn resolve(audio_dir: &Path, request: &ClipRequest) -> Result<ClipLocation> {
    for ext in EXTENSIONS {
        let mut file = request.base_name.clone();
        file.push(ext);
        let path = audio_dir.join(file);
        debug!("Checking {}", path.display());
        if path.exists() {
            return Ok(ClipLocation {
                path,
                extension: ext,
            });
        }
    }

    Err(Error::ClipNotFound {
        name: request.display_name(),
        dir: audio_dir.to_path_buf(),
    })
}
