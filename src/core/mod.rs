//! Core library components.
//!
//! This module contains the reusable logic for scoped configuration:
//! domain types, key resolution, storage and settings.

pub mod config;
pub mod constants;
pub mod domain;
pub mod resolver;
pub mod store;
pub mod types;
pub mod validation;
