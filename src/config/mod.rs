// src/config/mod.rs
pub mod types;

pub use self::types::{Config, Conventions, DiscoveryConfig, ImpactToml, KEY_FILE_CAP};

use crate::error::{ImpactError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE: &str = "impactmap.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prune_dirs: DiscoveryConfig::default().prune_dirs,
            ..Self::default()
        }
    }

    /// Loads `impactmap.toml` from `root`, falling back to defaults when absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed, or if an
    /// exclude pattern is not a valid regex.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&path).map_err(|source| ImpactError::Io {
            source,
            path: path.clone(),
        })?;
        let parsed: ImpactToml =
            toml::from_str(&content).map_err(|source| ImpactError::Config { source, path })?;
        Self::from_toml(parsed)
    }

    /// Builds a runtime config from parsed TOML.
    ///
    /// # Errors
    /// Returns error if an exclude pattern is not a valid regex.
    pub fn from_toml(parsed: ImpactToml) -> Result<Self> {
        let exclude_patterns = parsed
            .discovery
            .exclude
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            conventions: parsed.conventions,
            prune_dirs: parsed.discovery.prune_dirs,
            exclude_patterns,
        })
    }

    /// Returns true if a directory with this name is skipped during discovery.
    #[must_use]
    pub fn should_prune(&self, name: &str) -> bool {
        self.prune_dirs.iter().any(|d| d == name)
    }
}
