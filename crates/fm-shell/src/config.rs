//! Shell Configuration

use std::path::Path;

use fm_resolver::{ConfigError, ResolverConfig};
use serde::Deserialize;
use url::Url;

/// Shell configuration options
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Location opened by "home" and when no location is given
    pub home_uri: String,

    /// Catalog, special schemes and meta views
    pub resolver: ResolverConfig,

    /// Meta views switched off at startup
    pub disabled_meta_views: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home_uri: default_home_uri(),
            resolver: ResolverConfig::default(),
            disabled_meta_views: Vec::new(),
        }
    }
}

impl ShellConfig {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!("Loaded shell configuration from {}", path.display());
        Ok(config)
    }
}

/// `$HOME` as a directory URI, or the filesystem root
fn default_home_uri() -> String {
    std::env::var_os("HOME")
        .and_then(|home| Url::from_directory_path(home).ok())
        .map_or_else(|| "file:///".to_string(), String::from)
}
