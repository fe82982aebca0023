//! Resolves a clip name and plays it, best effort.
//!
//! Only a missing clip is an error. Player problems are reported to the
//! operator and otherwise ignored so the calling workflow is never blocked.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::clip::{self, ClipRequest};
use crate::error::Result;
use crate::player::{AudioPlayer, PlaybackResult};

const GENERATOR: &str = "generate_audio_clips.py";

#[derive(Debug)]
pub struct Notifier<P> {
    audio_dir: PathBuf,
    default_clip: String,
    player: P,
}

impl<P: AudioPlayer> Notifier<P> {
    pub fn new(audio_dir: PathBuf, default_clip: impl Into<String>, player: P) -> Self {
        Notifier {
            audio_dir,
            default_clip: default_clip.into(),
            player,
        }
    }

    /// Play the clip named by `arg` (or the default clip).
    ///
    /// Diagnostics go to `out`. Returns `Error::ClipNotFound` when no file
    /// matches; every playback outcome is `Ok`.
    pub fn notify<W: Write>(&self, arg: Option<&OsStr>, out: &mut W) -> Result<PlaybackResult> {
        let request = ClipRequest::from_arg(arg, &self.default_clip);
        debug!("Resolving clip {} in {}", request.display_name(), self.audio_dir.display());

        let location = match clip::resolve(&self.audio_dir, &request) {
            Ok(loc) => loc,
            Err(e) => {
                report(out, &[
                    format!("Audio file not found in: {}", self.audio_dir.display()),
                    format!("Looking for: {}", request.pattern()),
                    format!("Run {GENERATOR} first to create audio files."),
                ]);
                return Err(e);
            }
        };

        info!("Playing {}", location.path.display());
        let result = self.player.play(&location.path);
        match result {
            PlaybackResult::Success => {}
            PlaybackResult::Failed => {
                report(out, &[format!("Failed to play audio: {}", location.path.display())]);
            }
            PlaybackResult::Unavailable => {
                report(out, &[format!(
                    "Audio player not found. Install {} or configure a player for your system.",
                    self.player.program()
                )]);
            }
            PlaybackResult::TimedOut => {
                report(out, &[format!("Audio playback timed out: {}", location.path.display())]);
            }
        }
        Ok(result)
    }
}

/// Write operator-facing lines to `out`. A failed write is logged, not raised.
pub fn report<W: Write, S: AsRef<str>>(out: &mut W, lines: &[S]) {
    for line in lines {
        if let Err(e) = writeln!(out, "{}", line.as_ref()) {
            warn!("Cannot write diagnostic: {e}");
            return;
        }
    }
}
