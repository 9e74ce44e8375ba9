//! Settings file management.
//!
//! Handles locating the data directory and reading the optional
//! `config.toml` that selects resolution and storage policies.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::core::domain::AliasPolicy;
use crate::core::resolver::ResolveMode;
use crate::core::store::{DeletePolicy, StoreOptions};
use crate::error::{ConfigError, Result};

/// User settings stored in `<home>/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Database file; defaults to `<home>/dem_config.db`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    #[serde(default)]
    pub resolve: ResolveSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

/// Lookup behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveSettings {
    #[serde(default)]
    pub mode: ResolveMode,
    #[serde(default)]
    pub alias: AliasPolicy,
}

/// Storage behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSettings {
    #[serde(default)]
    pub delete: DeletePolicy,
    /// How long a write waits on another process's lock. Zero fails at once.
    #[serde(default)]
    pub busy_timeout_ms: u64,
}

impl Settings {
    /// Load settings from `<home>/config.toml`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load(home: &Path) -> Result<Self> {
        let path = home.join(constants::CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents, &path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        let settings = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(settings)
    }

    /// Database path: explicit override, then settings, then the default.
    pub fn database_path(&self, home: &Path, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| home.join(constants::DB_FILE))
    }

    /// Options for opening the store.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            delete: self.store.delete,
            busy_timeout: Duration::from_millis(self.store.busy_timeout_ms),
        }
    }
}

/// Data directory: `$DEM_HOME`, else `~/.dem`.
///
/// # Errors
///
/// Returns `ConfigError::NoHomeDir` if neither is available.
pub fn home_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(constants::HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(constants::HOME_DIR))
}
