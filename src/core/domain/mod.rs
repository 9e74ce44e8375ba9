//! Domain types.

mod alias;
mod entry;
mod scope;

pub use alias::{derive_alias, AliasPolicy};
pub use entry::{ConfigEntry, NewEntry};
pub use scope::Scope;
