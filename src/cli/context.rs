//! Per-invocation state shared by the command handlers.

use std::path::Path;

use tracing::debug;

use crate::core::config::Settings;
use crate::core::domain::Scope;
use crate::core::resolver::Resolver;
use crate::core::store::SqliteStore;
use crate::error::Result;

/// Opened store plus the settings and flags of this run.
pub struct Context {
    pub settings: Settings,
    pub store: SqliteStore,
    pub scope: Scope,
    pub verbose: bool,
}

impl Context {
    /// Load settings from `home` and open the database.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a broken settings file and a
    /// `StoreError::Unavailable` if the database cannot be opened.
    pub fn open(home: &Path, db: Option<&Path>, scope: Scope, verbose: bool) -> Result<Self> {
        let settings = Settings::load(home)?;
        let path = settings.database_path(home, db);
        debug!(db = %path.display(), ?settings, "opening context");

        let store = SqliteStore::open(&path, &settings.store_options())?;
        Ok(Self {
            settings,
            store,
            scope,
            verbose,
        })
    }

    /// Resolver over this context's store.
    pub fn resolver(&self) -> Resolver<'_, SqliteStore> {
        Resolver::new(&self.store, self.settings.resolve.mode)
    }
}
