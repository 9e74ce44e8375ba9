//! Input validation for dem operations.
//!
//! Validates keys and aliases before they reach the store.

use crate::error::{Result, ValidationError};

/// Validate a configuration key.
///
/// Keys are free-form dotted names with a few restrictions:
/// - Cannot be empty
/// - Cannot contain whitespace or control characters
/// - Must contain at least one non-dot character
///
/// # Arguments
///
/// * `key` - The key name to validate
///
/// # Errors
///
/// Returns `ValidationError` if the key is invalid.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }

    for (i, ch) in key.chars().enumerate() {
        if ch.is_whitespace() || ch.is_control() {
            return Err(ValidationError::InvalidKey {
                key: key.to_string(),
                reason: format!("invalid character {:?} at position {}", ch, i + 1),
            }
            .into());
        }
    }

    if key.chars().all(|ch| ch == '.') {
        return Err(ValidationError::InvalidKey {
            key: key.to_string(),
            reason: "must contain at least one segment".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validate an explicit alias.
///
/// Same rules as keys; an alias is looked up exactly like one.
pub fn validate_alias(alias: &str) -> Result<()> {
    validate_key(alias)
}
