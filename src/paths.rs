//! Centralized path definitions for regex-rocket
//!
//! ```text
//! <config dir>/regex-rocket/
//! └── config.toml        # Assistant settings and session defaults
//!
//! ./regex-rocket-session.json   # Default session export target
//! ./matches.txt, ./matches.csv  # Default match export targets
//! ```
//!
//! `<config dir>` is the platform config directory (`~/.config` on Linux).
//! Set `REGEX_ROCKET_CONFIG` to use a different config file.

use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "REGEX_ROCKET_CONFIG";

/// Application directory name under the platform config directory
const APP_DIR: &str = "regex-rocket";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the config directory.
///
/// Returns `<config dir>/regex-rocket`, or `./regex-rocket` when the
/// platform has no config directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the config file path.
///
/// Honors `REGEX_ROCKET_CONFIG` when set and non-empty.
#[must_use]
pub fn config_file() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config_dir().join(CONFIG_FILE),
    }
}
