//! Configuration storage.
//!
//! Provides the storage abstraction the resolver and CLI work against, with
//! a SQLite implementation.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `memory.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Remote { /* ... */ }
//!
//! impl Store for Remote {
//!     fn upsert(&mut self, entry: &NewEntry) -> Result<Upsert> {
//!         // Check-then-write inside one transaction
//!     }
//!     fn find(&self, scope: &Scope, field: LookupField, value: &str) -> Result<Vec<ConfigEntry>> {
//!         // Exact match on one column, scope-filtered
//!     }
//!     // ...
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::domain::{ConfigEntry, NewEntry, Scope};
use crate::core::types::EntryId;
use crate::error::Result;

mod sqlite;

pub use sqlite::SqliteStore;

/// What a delete does to the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeletePolicy {
    /// Mark the row deleted and keep it.
    #[default]
    Soft,
    /// Remove the row.
    Hard,
}

/// Options applied when opening a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    pub delete: DeletePolicy,
    /// Lock wait before a write fails with `StoreError::Unavailable`.
    pub busy_timeout: Duration,
}

/// Column a single resolution level matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupField {
    Key,
    Alias,
    AutoAlias,
}

impl LookupField {
    /// Resolution order.
    pub const ALL: [LookupField; 3] = [LookupField::Key, LookupField::Alias, LookupField::AutoAlias];
}

impl std::fmt::Display for LookupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LookupField::Key => "key",
            LookupField::Alias => "alias",
            LookupField::AutoAlias => "auto_alias",
        };
        f.write_str(name)
    }
}

/// Outcome of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created(EntryId),
    Updated(EntryId),
}

impl Upsert {
    pub fn id(&self) -> EntryId {
        match self {
            Upsert::Created(id) | Upsert::Updated(id) => *id,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Upsert::Created(_))
    }
}

/// Configuration storage trait.
///
/// Entries are keyed by scope and key; only one live entry may exist per
/// pair. Read methods never return deleted entries, except [`Store::get`].
pub trait Store {
    /// Insert an entry or update the live entry with the same scope and key.
    ///
    /// The existence check and the write happen in one transaction; on
    /// update `created` is kept and `updated` refreshed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateKey` if a concurrent writer inserted the
    /// same scope and key first, `StoreError::Unavailable` if the
    /// transaction cannot begin or commit.
    fn upsert(&mut self, entry: &NewEntry) -> Result<Upsert>;

    /// Live entries in `scope` whose `field` equals `value`.
    fn find(&self, scope: &Scope, field: LookupField, value: &str) -> Result<Vec<ConfigEntry>>;

    /// Fetch an entry by id, deleted or not.
    fn get(&self, id: EntryId) -> Result<Option<ConfigEntry>>;

    /// Delete a live entry according to the store's [`DeletePolicy`].
    ///
    /// # Returns
    ///
    /// Rows affected. Zero means the id was stale or already deleted, which
    /// is not an error at this layer.
    fn delete(&mut self, id: EntryId) -> Result<usize>;

    /// Live entries in `scope`, ordered by project, environment, module, key.
    fn list(&self, scope: &Scope) -> Result<Vec<ConfigEntry>>;

    /// Distinct projects with live entries.
    fn distinct_projects(&self) -> Result<Vec<String>>;

    /// Distinct environments with live entries, within the scope's project.
    fn distinct_environments(&self, scope: &Scope) -> Result<Vec<String>>;

    /// Distinct modules with live entries, within the scope's project and
    /// environment.
    fn distinct_modules(&self, scope: &Scope) -> Result<Vec<String>>;
}
