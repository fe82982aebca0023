//! Exit-status contract of the built binary.
#![cfg(unix)]

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::process::{Command, Output};

fn run<A: AsRef<OsStr>>(audio_dir: &Path, player: &str, arg: Option<A>) -> Output {
    let work = tempfile::tempdir().unwrap();
    let config = work.path().join("hook-chime.toml");
    std::fs::write(&config, format!("[player]\ncommand = \"{player}\"\n")).unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hook-chime"));
    cmd.env("HOOK_CHIME_CONFIG", &config)
        .env("HOOK_CHIME_AUDIO_DIR", audio_dir)
        .env_remove("RUST_LOG");
    if let Some(arg) = arg {
        cmd.arg(arg);
    }
    cmd.output().unwrap()
}

fn clips(files: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for f in files {
        std::fs::write(dir.path().join(f), b"").unwrap();
    }
    dir
}

#[test]
fn plays_default_clip() {
    let dir = clips(&["task_complete.wav"]);
    let out = run(dir.path(), "true", None::<&str>);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Stop hook triggered!"));
}

#[test]
fn missing_clip_exits_one() {
    let dir = clips(&["alert.wav"]);
    let out = run(dir.path(), "true", Some("missing_clip"));
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(&format!("Audio file not found in: {}", dir.path().display())));
    assert!(stdout.contains("Looking for: missing_clip.[mp3|aiff|wav|m4a]"));
}

#[test]
fn failing_player_still_exits_zero() {
    let dir = clips(&["alert.wav"]);
    let out = run(dir.path(), "false", Some("alert"));
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Failed to play audio:"));
    assert!(stdout.contains("alert.wav"));
}

#[test]
fn absent_player_still_exits_zero() {
    let dir = clips(&["alert.mp3"]);
    let out = run(dir.path(), "hook-chime-no-such-player", Some("alert"));
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Audio player not found. Install hook-chime-no-such-player"));
}

#[test]
fn non_utf8_name_exits_one() {
    let dir = clips(&[]);
    let out = run(dir.path(), "true", Some(OsStr::from_bytes(b"caf\xe9")));
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Looking for: caf\u{fffd}.[mp3|aiff|wav|m4a]"));
}
