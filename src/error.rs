//! Error types for dem.
//!
//! Errors are grouped by the layer that raises them and wrapped by the
//! top-level [`Error`]. The CLI shell maps each variant to an exit code via
//! [`Error::exit_code`].

use crate::core::domain::{ConfigEntry, Scope};

/// Exit code for usage errors and unresolvable lookups.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for unrecoverable storage or configuration failures.
pub const EXIT_FATAL: i32 = 2;

/// Top-level error type.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Storage and configuration failures are fatal (`2`); everything the
    /// user can fix by changing arguments or data exits with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Store(StoreError::Unavailable { .. })
            | Error::Store(StoreError::Query(_))
            | Error::Config(_)
            | Error::Io(_) => EXIT_FATAL,
            _ => EXIT_FAILURE,
        }
    }

    /// A short follow-up suggestion for the user, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Entry(EntryError::NotFound { .. }) => {
                Some("check the scope flags (-p, -e, -m) or run: dem list -v")
            }
            Error::Entry(EntryError::Ambiguous { .. }) => {
                Some("use the full key or narrow the scope with -p, -e, -m")
            }
            Error::Store(StoreError::DuplicateKey { .. }) => {
                Some("another invocation wrote the same key; retry the command")
            }
            _ => None,
        }
    }
}

/// Input validation failures.
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("key cannot be empty")]
    EmptyKey,

    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("{dimension} cannot be empty")]
    EmptyScope { dimension: &'static str },
}

/// Resolution outcomes that cannot be acted upon.
#[derive(thiserror::Error, Debug)]
pub enum EntryError {
    #[error("config not found for key: {lookup} ({scope})")]
    NotFound { lookup: String, scope: Scope },

    #[error("'{lookup}' matches {} entries", .candidates.len())]
    Ambiguous {
        lookup: String,
        candidates: Vec<ConfigEntry>,
    },

    /// The entry disappeared between resolution and the write.
    #[error("no configuration item was deleted: '{key}' was already removed")]
    Stale { key: String },
}

/// Storage layer failures.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("config already exists: {key} ({scope})")]
    DuplicateKey { scope: Scope, key: String },

    #[error("storage unavailable: {context}: {source}")]
    Unavailable {
        context: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),
}

impl StoreError {
    /// Wrap a connection or transaction failure with context.
    pub fn unavailable(context: impl Into<String>, source: rusqlite::Error) -> Self {
        StoreError::Unavailable {
            context: context.into(),
            source,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::Store(StoreError::Query(e))
    }
}

/// Settings file errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
