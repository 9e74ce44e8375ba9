//! dem - A scoped key-value configuration store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── add           # Insert or update an entry
//! │   ├── get           # Resolve and print
//! │   ├── delete        # Resolve, confirm, delete
//! │   ├── list          # List entries or scope values
//! │   ├── render        # Terse, verbose and grouped formatting
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # ~/.dem/config.toml settings
//!     ├── domain/       # Scope, entries, auto-alias derivation
//!     ├── resolver      # key → alias → auto-alias lookup
//!     └── store/        # Store trait and SQLite backend
//! ```
//!
//! # Features
//!
//! - Entries scoped by project, environment and module
//! - Lookup by key, explicit alias or derived alias
//! - Atomic insert-or-update with duplicate detection
//! - Soft or physical delete after confirmation

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{derive_alias, AliasPolicy, ConfigEntry, NewEntry, Scope};
pub use crate::core::resolver::{ResolveMode, Resolver};
pub use crate::core::store::{DeletePolicy, LookupField, SqliteStore, Store, StoreOptions, Upsert};
pub use crate::error::{Error, Result};
