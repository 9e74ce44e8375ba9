//! Constants used throughout dem.
//!
//! Centralizes magic strings and configuration values.

/// Sentinel scope value meaning "unconstrained in this dimension".
pub const DEFAULT_SCOPE: &str = "default";

/// Data directory relative to HOME (~/.dem).
pub const HOME_DIR: &str = ".dem";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "DEM_HOME";

/// Environment variable overriding the database path.
pub const DB_ENV: &str = "DEM_DB";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "DEM_LOG";

/// Database file name inside the data directory.
pub const DB_FILE: &str = "dem_config.db";

/// Settings file name inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "dem.log";

/// Type tag stored when none is given.
pub const DEFAULT_CONFIG_TYPE: &str = "string";
