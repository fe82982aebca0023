//! Error type shared by the hook modules.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status when no clip file matches the requested name.
pub const EXIT_CLIP_NOT_FOUND: i32 = 1;

/// Reserved for failures other than a missing clip. Config errors map here
/// but are absorbed by the config fallback chain, so the CLI only exits with
/// 0 or 1 today.
pub const EXIT_FAILURE: i32 = 2;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no clip named {name} in {}", dir.display())]
    ClipNotFound { name: String, dir: PathBuf },

    #[error("read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Process exit status for errors that end the hook.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ClipNotFound { .. } => EXIT_CLIP_NOT_FOUND,
            Error::ConfigRead { .. } | Error::ConfigParse { .. } => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
