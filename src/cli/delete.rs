//! Delete command.
//!
//! Resolves a lookup to exactly one entry, asks for confirmation and
//! deletes it.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Confirm;
use tracing::info;

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::domain::ConfigEntry;
use crate::core::store::Store;
use crate::error::{EntryError, Result};

/// Delete one entry after confirmation.
///
/// Declining is not an error: nothing changes and the command succeeds.
pub fn execute(ctx: &mut Context, lookup: &str, yes: bool) -> Result<()> {
    let entry = ctx.resolver().resolve_one(&ctx.scope, lookup)?;

    if !yes && !confirm(&entry)? {
        output::dimmed("Deletion cancelled.");
        return Ok(());
    }

    let affected = ctx.store.delete(entry.id)?;
    if affected == 0 {
        return Err(EntryError::Stale { key: entry.key }.into());
    }
    info!(key = %entry.key, scope = %entry.scope, lookup, policy = ?ctx.store.delete_policy(), "deleted");

    if ctx.verbose {
        println!("Configuration item deleted successfully:");
        println!("  Project:     {}", entry.scope.project);
        println!("  Environment: {}", entry.scope.environment);
        println!("  Module:      {}", entry.scope.module);
        println!("  Key:         {}", entry.key);
        println!("  Deleted using identifier: {}", lookup);
    } else {
        output::success(&format!("deleted {}", output::key(&entry.key)));
    }
    Ok(())
}

/// Ask whether to delete `entry`.
///
/// Uses an interactive prompt on a terminal; otherwise reads one line from
/// stdin and accepts `y` or `yes`. End of input counts as no.
fn confirm(entry: &ConfigEntry) -> Result<bool> {
    let prompt = format!(
        "Delete configuration item '{}' ({})?",
        entry.key, entry.scope
    );

    if io::stdin().is_terminal() {
        return Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?);
    }

    eprint!("{} (y/N): ", prompt);
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
