//! Auto-alias derivation.
//!
//! An auto-alias is the first character of every dot-separated segment of a
//! key, joined with dots: `service.timeout.ms` becomes `s.t.m`.

use serde::{Deserialize, Serialize};

/// How single-segment keys are abbreviated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AliasPolicy {
    /// Always abbreviate: `host` becomes `h`.
    #[default]
    Initials,
    /// Keys without a dot are their own alias: `host` stays `host`.
    KeepSingleSegment,
}

/// Derive the auto-alias for a key.
///
/// Empty segments are skipped, so `a..b` yields `a.b` and an empty key
/// yields an empty alias. Segments are abbreviated by their first Unicode
/// scalar, never by byte.
pub fn derive_alias(key: &str, policy: AliasPolicy) -> String {
    if policy == AliasPolicy::KeepSingleSegment && !key.contains('.') {
        return key.to_string();
    }

    key.split('.')
        .filter_map(|segment| segment.chars().next())
        .map(String::from)
        .collect::<Vec<_>>()
        .join(".")
}
