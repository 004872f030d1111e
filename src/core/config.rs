//! User configuration.
//!
//! Settings live in a JSON file, `config.json` in the git-sift config directory,
//! unless `GIT_SIFT_CONFIG` points somewhere else. A missing file means defaults;
//! a file that exists but cannot be read or parsed is an error.
//!
//! ```json
//! {
//!   "show_full_path": false,
//!   "metadata_dir": ".git",
//!   "git_binary": "git"
//! }
//! ```

use crate::core::dirs::get_config_directory;
use crate::core::error::{GitSiftError, Result};
use crate::core::paths::GIT_DIR_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "GIT_SIFT_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Report paths joined onto the repository root
    pub show_full_path: bool,
    /// Directory name that marks a repository root
    pub metadata_dir: String,
    /// Program used to produce status text
    pub git_binary: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_full_path: false,
            metadata_dir: GIT_DIR_NAME.to_string(),
            git_binary: "git".to_string(),
        }
    }
}

impl Config {
    /// Load from `$GIT_SIFT_CONFIG` or the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| GitSiftError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| GitSiftError::config_parse_failed(path, e))
    }

    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| get_config_directory().join("config.json"))
    }
}
