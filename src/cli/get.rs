//! Get command.
//!
//! Resolves a key, alias or auto-alias and prints what it names.

use crate::cli::context::Context;
use crate::cli::{output, render};
use crate::error::{EntryError, Result};

/// Resolve and print.
///
/// One match prints its value (or full record with `-v`). Several matches
/// are all printed, with a warning that the lookup was ambiguous.
pub fn execute(ctx: &Context, lookup: &str, json: bool) -> Result<()> {
    let entries = ctx.resolver().resolve(&ctx.scope, lookup)?;

    if entries.is_empty() {
        return Err(EntryError::NotFound {
            lookup: lookup.to_string(),
            scope: ctx.scope.clone(),
        }
        .into());
    }

    if json {
        println!("{}", render::json(&entries)?);
        return Ok(());
    }

    if entries.len() > 1 {
        output::warn(&format!(
            "'{}' matches {} entries",
            lookup,
            entries.len()
        ));
        if !ctx.verbose {
            for entry in &entries {
                output::list_item(&format!("{} ({})", entry.key, entry.scope));
            }
        }
    }

    if ctx.verbose {
        print!("{}", render::records(&entries));
    } else {
        print!("{}", render::values(&entries));
    }
    Ok(())
}
