//! XDG-style path utilities for configuration.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations so the
//! config file lives in the same place on every Unix.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "llmchat";

/// Returns the configuration directory for llmchat.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/llmchat` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/llmchat` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
