//! Key resolution.
//!
//! A lookup string is matched against three columns in order: the canonical
//! key, the explicit alias, then the auto-alias. [`ResolveMode`] decides
//! whether every level is consulted or the first hit wins.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::core::domain::{ConfigEntry, Scope};
use crate::core::store::{LookupField, Store};
use crate::error::{EntryError, Result};

/// How the three lookup levels combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolveMode {
    /// Query every level and return the de-duplicated union, in level order.
    #[default]
    Union,
    /// Stop at the first level that matches anything.
    FirstMatch,
}

/// Resolves lookup strings against a store.
pub struct Resolver<'a, S: Store + ?Sized> {
    store: &'a S,
    mode: ResolveMode,
}

impl<'a, S: Store + ?Sized> Resolver<'a, S> {
    pub fn new(store: &'a S, mode: ResolveMode) -> Self {
        Self { store, mode }
    }

    /// All entries in `scope` that `lookup` names.
    ///
    /// An empty result is not an error here; callers decide what zero or
    /// several matches mean.
    pub fn resolve(&self, scope: &Scope, lookup: &str) -> Result<Vec<ConfigEntry>> {
        let mut seen = HashSet::new();
        let mut matches = Vec::new();

        for field in LookupField::ALL {
            let found = self.store.find(scope, field, lookup)?;
            debug!(%field, lookup, hits = found.len(), "resolution level");

            let hit = !found.is_empty();
            matches.extend(found.into_iter().filter(|e| seen.insert(e.id)));

            if hit && self.mode == ResolveMode::FirstMatch {
                break;
            }
        }

        Ok(matches)
    }

    /// The single entry `lookup` names.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::NotFound` for no match and
    /// `EntryError::Ambiguous` with every candidate for more than one.
    pub fn resolve_one(&self, scope: &Scope, lookup: &str) -> Result<ConfigEntry> {
        let mut matches = self.resolve(scope, lookup)?;
        match matches.len() {
            0 => Err(EntryError::NotFound {
                lookup: lookup.to_string(),
                scope: scope.clone(),
            }
            .into()),
            1 => Ok(matches.remove(0)),
            _ => Err(EntryError::Ambiguous {
                lookup: lookup.to_string(),
                candidates: matches,
            }
            .into()),
        }
    }
}
