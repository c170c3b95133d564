//! Display configuration, loaded from TOML files

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading tracker configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
}

/// Which infobox categories the tracker may display.
///
/// A disabled category is suppressed entirely, even while its numeric
/// trigger condition holds. The config is read-only from the tracker's
/// perspective; the host pushes changes through
/// [`StatusTracker::config_changed`](crate::StatusTracker::config_changed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Infoboxes for active poison and venom: next hit time and damage
    #[serde(default)]
    pub show_toxin_infoboxes: bool,
    /// Infoboxes for antipoison and antivenom protection duration
    #[serde(default = "default_show_antidote")]
    pub show_antidote_infoboxes: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            show_toxin_infoboxes: false,
            show_antidote_infoboxes: true,
        }
    }
}

fn default_show_antidote() -> bool {
    true
}

impl TrackerConfig {
    /// Load configuration from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: path.to_path_buf(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.to_path_buf(),
        })
    }

    /// True when every category is disabled and nothing may be displayed
    pub fn all_hidden(&self) -> bool {
        !self.show_toxin_infoboxes && !self.show_antidote_infoboxes
    }
}
