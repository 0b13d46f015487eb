//! Default file locations for the CLI.

use std::path::PathBuf;

const HOME: &str = ".linescout";

/// `~/.linescout`, falling back to `./.linescout` without a home directory.
pub fn home_dir() -> PathBuf {
    let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(HOME)
}

/// Config file read when `--config` is not given.
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
