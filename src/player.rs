//! Clip playback through an external, platform-provided player binary.

use std::io;
use std::path::Path;
use std::process::{Child, Command, ExitStatus};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::config::PlayerConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Outcome of a single playback attempt. None of these are fatal to the hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    Success,
    /// The player ran but reported failure, or could not be started.
    Failed,
    /// The player executable is not installed.
    Unavailable,
    /// The player outlived the configured timeout and was killed.
    TimedOut,
}

pub trait AudioPlayer {
    /// Play `path` to completion.
    fn play(&self, path: &Path) -> PlaybackResult;

    /// Name of the executable, used in diagnostics.
    fn program(&self) -> &str;
}

/// Runs `<command> <args..> <path>` and waits for it.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    command: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl CommandPlayer {
    pub fn new(command: impl Into<String>) -> Self {
        CommandPlayer {
            command: command.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        CommandPlayer::new(config.command.clone())
            .with_args(config.args.clone())
            .with_timeout(config.timeout_ms.map(Duration::from_millis))
    }

    fn wait(&self, mut child: Child) -> io::Result<Option<ExitStatus>> {
        let Some(timeout) = self.timeout else {
            return child.wait().map(Some);
        };

        let started = Instant::now();
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(Some(status));
            }
            if started.elapsed() >= timeout {
                warn!("{} exceeded {}ms, killing", self.command, timeout.as_millis());
                // Already-exited races are fine; reap either way.
                let _ = child.kill();
                child.wait()?;
                return Ok(None);
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

impl AudioPlayer for CommandPlayer {
    fn play(&self, path: &Path) -> PlaybackResult {
        debug!("Running {} {:?} {}", self.command, self.args, path.display());
        let child = Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .spawn();

        let child = match child {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} not found: {e}", self.command);
                return PlaybackResult::Unavailable;
            }
            Err(e) => {
                warn!("Failed to start {}: {e}", self.command);
                return PlaybackResult::Failed;
            }
        };

        match self.wait(child) {
            Ok(Some(status)) if status.success() => PlaybackResult::Success,
            Ok(Some(status)) => {
                debug!("{} exited with {status}", self.command);
                PlaybackResult::Failed
            }
            Ok(None) => PlaybackResult::TimedOut,
            Err(e) => {
                warn!("Waiting on {} failed: {e}", self.command);
                PlaybackResult::Failed
            }
        }
    }

    fn program(&self) -> &str {
        &self.command
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn zero_exit_is_success() {
        let player = CommandPlayer::new("true");
        assert_eq!(player.play(Path::new("/nonexistent.wav")), PlaybackResult::Success);
    }

    #[test]
    fn nonzero_exit_is_failed() {
        let player = CommandPlayer::new("false");
        assert_eq!(player.play(Path::new("/nonexistent.wav")), PlaybackResult::Failed);
    }

    #[test]
    fn missing_binary_is_unavailable() {
        let player = CommandPlayer::new("hook-chime-no-such-player");
        assert_eq!(player.play(Path::new("/nonexistent.wav")), PlaybackResult::Unavailable);
    }

    #[test]
    fn path_is_last_argument() {
        let dir = tempfile::tempdir().unwrap();
        let clip = dir.path().join("alert.wav");
        std::fs::write(&clip, b"").unwrap();
        // `test -f <path>` only succeeds when the path arrives intact.
        let player = CommandPlayer::new("test").with_args(vec!["-f".into()]);
        assert_eq!(player.play(&clip), PlaybackResult::Success);
    }

    #[test]
    fn slow_player_times_out() {
        let player = CommandPlayer::new("sh")
            .with_args(vec!["-c".into(), "sleep 5".into(), "sh".into()])
            .with_timeout(Some(Duration::from_millis(200)));
        let started = Instant::now();
        assert_eq!(player.play(Path::new("/nonexistent.wav")), PlaybackResult::TimedOut);
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn fast_player_finishes_within_timeout() {
        let player = CommandPlayer::new("true").with_timeout(Some(Duration::from_secs(5)));
        assert_eq!(player.play(Path::new("/nonexistent.wav")), PlaybackResult::Success);
    }
}
