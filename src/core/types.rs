//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A canonical configuration key (e.g., `db.host`).
///
/// Unique within a scope among live entries.
pub type ConfigKey = String;

/// A stored configuration value.
pub type ConfigValue = String;

/// Row identifier assigned by the store.
pub type EntryId = i64;
