//! TOML configuration for the hook, plus install-root discovery.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::clip::DEFAULT_CLIP;
use crate::error::{Error, Result};

pub const CONFIG_ENV: &str = "HOOK_CHIME_CONFIG";
pub const AUDIO_DIR_ENV: &str = "HOOK_CHIME_AUDIO_DIR";
const CONFIG_FILE: &str = "hook-chime.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct HookConfig {
    #[serde(default = "default_clip")]
    pub default_clip: String,
    /// Defaults to `<install_root>/audio` when absent.
    pub audio_dir: Option<PathBuf>,
    #[serde(default)]
    pub player: PlayerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_command")]
    pub command: String,
    /// Passed before the clip path.
    #[serde(default)]
    pub args: Vec<String>,
    /// No timeout when absent: a hung player blocks the hook.
    pub timeout_ms: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            command: default_command(),
            args: Vec::new(),
            timeout_ms: None,
        }
    }
}

impl Default for HookConfig {
    fn default() -> Self {
        HookConfig {
            default_clip: default_clip(),
            audio_dir: None,
            player: PlayerConfig::default(),
        }
    }
}

fn default_clip() -> String { DEFAULT_CLIP.into() }
fn default_command() -> String { "afplay".into() }

impl HookConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config with fallback chain:
    /// 1. $HOOK_CHIME_CONFIG env var
    /// 2. {install_root}/hook-chime.toml
    /// 3. {install_root}/hooks/hook-chime.toml
    /// 4. Built-in defaults
    pub fn find_and_load(install_root: &Path) -> Self {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_first(&candidates(install_root, explicit))
    }

    fn load_first(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            if path.exists() {
                match Self::load(path) {
                    Ok(config) => {
                        info!("Loaded hook config from {}", path.display());
                        return config;
                    }
                    Err(e) => warn!("Failed to load config: {e}"),
                }
            }
        }

        info!("Using built-in default hook config");
        Self::default()
    }

    /// Audio directory, preferring `env_override` over the config file.
    /// Relative config paths are taken from the install root.
    pub fn audio_dir(&self, install_root: &Path, env_override: Option<PathBuf>) -> PathBuf {
        if let Some(dir) = env_override {
            return dir;
        }
        match &self.audio_dir {
            Some(dir) => install_root.join(dir),
            None => install_root.join("audio"),
        }
    }
}

fn candidates(install_root: &Path, explicit: Option<PathBuf>) -> Vec<PathBuf> {
    vec![
        explicit,
        Some(install_root.join(CONFIG_FILE)),
        Some(install_root.join("hooks").join(CONFIG_FILE)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// The directory above the one holding the executable, so a binary at
/// `<root>/hooks/hook-chime` yields `<root>`.
pub fn install_root() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => {
            if let Some(root) = exe.parent().and_then(Path::parent) {
                return root.to_path_buf();
            }
            warn!("Executable {} has no grandparent directory", exe.display());
        }
        Err(e) => warn!("Cannot locate executable: {e}"),
    }
    PathBuf::from(".")
}
