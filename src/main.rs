//! hook-chime: stop hook that announces task completion
//!
//! Plays a pre-generated clip from `<install_root>/audio` through the system
//! audio player. Usage: `hook-chime [clip-name]`.

use std::io::Write;
use std::path::PathBuf;

use log::{error, info, warn};

use hook_chime::config::{self, HookConfig, AUDIO_DIR_ENV};
use hook_chime::notifier::{self, Notifier};
use hook_chime::player::CommandPlayer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut stdout = std::io::stdout().lock();
    notifier::report(&mut stdout, &["Stop hook triggered!"]);

    // Resolve paths
    let install_root = config::install_root();
    info!("Install root: {}", install_root.display());

    let config = HookConfig::find_and_load(&install_root);
    let audio_dir = config.audio_dir(
        &install_root,
        std::env::var_os(AUDIO_DIR_ENV).map(PathBuf::from),
    );
    info!("Audio dir: {}", audio_dir.display());

    let player = CommandPlayer::from_config(&config.player);
    let notifier = Notifier::new(audio_dir, config.default_clip, player);

    let arg = std::env::args_os().nth(1);
    if let Err(e) = notifier.notify(arg.as_deref(), &mut stdout) {
        error!("{e}");
        if let Err(flush_err) = stdout.flush() {
            warn!("Cannot flush stdout: {flush_err}");
        }
        std::process::exit(e.exit_code());
    }
}
