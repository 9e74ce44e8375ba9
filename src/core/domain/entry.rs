//! Configuration entry types.
//!
//! [`ConfigEntry`] is a stored row; [`NewEntry`] is what callers hand to
//! [`Store::upsert`](crate::core::store::Store::upsert).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alias::{derive_alias, AliasPolicy};
use super::scope::Scope;
use crate::core::constants::DEFAULT_CONFIG_TYPE;
use crate::core::types::{ConfigKey, ConfigValue, EntryId};

/// A stored configuration entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub id: EntryId,
    #[serde(flatten)]
    pub scope: Scope,
    pub key: ConfigKey,
    pub value: ConfigValue,
    pub alias: Option<String>,
    pub auto_alias: String,
    pub config_type: String,
    pub encrypted: bool,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
    pub deleted: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl ConfigEntry {
    /// Key used to group entries for display.
    pub fn group(&self) -> (&str, &str, &str) {
        (
            &self.scope.project,
            &self.scope.environment,
            &self.scope.module,
        )
    }
}

impl std::fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// Payload for an insert-or-update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub scope: Scope,
    pub key: ConfigKey,
    pub value: ConfigValue,
    pub alias: Option<String>,
    pub auto_alias: String,
    pub config_type: String,
    pub encrypted: bool,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
}

impl NewEntry {
    /// Build an entry, deriving its auto-alias under `policy`.
    pub fn new(
        scope: Scope,
        key: impl Into<ConfigKey>,
        value: impl Into<ConfigValue>,
        policy: AliasPolicy,
    ) -> Self {
        let key = key.into();
        let auto_alias = derive_alias(&key, policy);
        Self {
            scope,
            key,
            value: value.into(),
            alias: None,
            auto_alias,
            config_type: DEFAULT_CONFIG_TYPE.to_string(),
            encrypted: false,
            description: None,
            sort_order: None,
        }
    }

    /// Set an explicit alias.
    pub fn with_alias(mut self, alias: Option<String>) -> Self {
        self.alias = alias;
        self
    }

    /// Set the free-form type tag.
    pub fn with_type(mut self, config_type: impl Into<String>) -> Self {
        self.config_type = config_type.into();
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_sort_order(mut self, sort_order: Option<i64>) -> Self {
        self.sort_order = sort_order;
        self
    }
}
