//! Configuration management
//!
//! Stored at `<config dir>/regex-rocket/config.toml` (see [`crate::paths`]).
//! Every field has a default, so a missing or partial file is fine.
//!
//! ```toml
//! [assistant]
//! model = "gemini-2.5-flash"
//! endpoint = "https://generativelanguage.googleapis.com/v1beta"
//! api_key_env = "GEMINI_API_KEY"
//!
//! [defaults]
//! flags = "g"
//! pattern = '\d{4}-\d{2}-\d{2}'
//! subject = "Today is 2023-10-27, but not 27-10-2023. Another date is 2024-01-01."
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::models::{Flags, SessionState};
use crate::paths;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Generative assistant settings
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Starting values for new sessions and commands
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Generative assistant settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// Session defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Flags in compact form (e.g. "g", "gi")
    #[serde(default = "default_flags")]
    pub flags: String,
    /// Pattern a new interactive session starts with
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Subject a new interactive session starts with
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_flags() -> String {
    "g".to_string()
}

fn default_pattern() -> String {
    r"\d{4}-\d{2}-\d{2}".to_string()
}

fn default_subject() -> String {
    "Today is 2023-10-27, but not 27-10-2023. Another date is 2024-01-01.".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            flags: default_flags(),
            pattern: default_pattern(),
            subject: default_subject(),
        }
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from the default location, or defaults if absent
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if absent or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                warn!("Ignoring malformed config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                warn!("Could not read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default flags, falling back to `g` if the configured string is invalid
    #[must_use]
    pub fn default_flags(&self) -> Flags {
        self.defaults.flags.parse().unwrap_or_else(|e| {
            warn!("Ignoring configured flags {:?}: {e}", self.defaults.flags);
            Flags::global()
        })
    }

    /// Starting state for an interactive session
    #[must_use]
    pub fn initial_state(&self) -> SessionState {
        SessionState::new(
            self.defaults.pattern.clone(),
            self.defaults.subject.clone(),
            self.default_flags(),
        )
    }
}
