//! Shared modules for the hook binary.

pub mod clip;
pub mod config;
pub mod error;
pub mod notifier;
pub mod player;

pub use error::{Error, Result};
