//! Formatting of entries for stdout.
//!
//! Every function returns a `String` so the layouts can be tested without a
//! terminal. Nothing here is colored: this output is meant for pipes.

use std::fmt::Write;

use crate::core::domain::ConfigEntry;
use crate::error::Result;

/// Raw values, one per line.
pub fn values(entries: &[ConfigEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.value);
        out.push('\n');
    }
    out
}

/// `key=value` pairs, one per line.
pub fn pairs(entries: &[ConfigEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{}={}", entry.key, entry.value);
    }
    out
}

/// Plain strings, one per line.
pub fn lines(items: &[String]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(item);
        out.push('\n');
    }
    out
}

/// Every field of one entry, labelled.
pub fn record(entry: &ConfigEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Project:     {}", entry.scope.project);
    let _ = writeln!(out, "Environment: {}", entry.scope.environment);
    let _ = writeln!(out, "Module:      {}", entry.scope.module);
    fields(&mut out, entry, "");
    out
}

/// Several records separated by blank lines.
pub fn records(entries: &[ConfigEntry]) -> String {
    entries
        .iter()
        .map(record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Entries grouped by project, environment and module.
///
/// A group header is printed only when its value changes from the previous
/// entry, so input must already be sorted by the grouping key.
pub fn grouped(entries: &[ConfigEntry]) -> String {
    let mut out = String::new();
    let mut current: (Option<&str>, Option<&str>, Option<&str>) = (None, None, None);

    for entry in entries {
        let (project, environment, module) = entry.group();

        if current.0 != Some(project) {
            current = (Some(project), None, None);
            let _ = writeln!(out, "[Project: {}]", project);
        }
        if current.1 != Some(environment) {
            current.1 = Some(environment);
            current.2 = None;
            let _ = writeln!(out, "  [Environment: {}]", environment);
        }
        if current.2 != Some(module) {
            current.2 = Some(module);
            let _ = writeln!(out, "    [Module: {}]", module);
        }

        fields(&mut out, entry, "      ");
        out.push('\n');
    }
    out
}

/// Entries as a pretty-printed JSON array.
pub fn json(entries: &[ConfigEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

fn fields(out: &mut String, entry: &ConfigEntry, indent: &str) {
    let _ = writeln!(out, "{indent}Key:         {}", entry.key);
    let _ = writeln!(out, "{indent}Value:       {}", entry.value);
    if let Some(alias) = &entry.alias {
        let _ = writeln!(out, "{indent}Alias:       {}", alias);
    }
    if !entry.auto_alias.is_empty() {
        let _ = writeln!(out, "{indent}AutoAlias:   {}", entry.auto_alias);
    }
    let _ = writeln!(out, "{indent}Type:        {}", entry.config_type);
    let _ = writeln!(out, "{indent}Encrypted:   {}", entry.encrypted);
    if let Some(description) = &entry.description {
        let _ = writeln!(out, "{indent}Description: {}", description);
    }
    if let Some(order) = entry.sort_order {
        let _ = writeln!(out, "{indent}SortOrder:   {}", order);
    }
    let _ = writeln!(out, "{indent}Created:     {}", entry.created.to_rfc3339());
    let _ = writeln!(out, "{indent}Updated:     {}", entry.updated.to_rfc3339());
}
