//! Add command.
//!
//! Inserts an entry or updates the one with the same scope and key.

use tracing::info;

use crate::cli::context::Context;
use crate::cli::{output, render};
use crate::core::domain::NewEntry;
use crate::core::store::Store;
use crate::core::validation::{validate_alias, validate_key};
use crate::error::Result;

/// Arguments of `dem add`.
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub key: String,
    pub value: Vec<String>,
    pub alias: Option<String>,
    pub description: Option<String>,
    pub config_type: String,
    pub sort_order: Option<i64>,
}

/// Upsert an entry.
///
/// The value is the remaining arguments joined with spaces. Without
/// `--alias` the explicit alias is set to the auto-alias.
pub fn execute(ctx: &mut Context, args: AddArgs) -> Result<()> {
    validate_key(&args.key)?;
    if let Some(alias) = &args.alias {
        validate_alias(alias)?;
    }

    let value = args.value.join(" ");
    info!(key = %args.key, value = %value, alias = ?args.alias, scope = %ctx.scope, "add");

    let mut entry = NewEntry::new(
        ctx.scope.clone(),
        args.key,
        value,
        ctx.settings.resolve.alias,
    )
    .with_type(args.config_type)
    .with_description(args.description)
    .with_sort_order(args.sort_order);
    let alias = args.alias.unwrap_or_else(|| entry.auto_alias.clone());
    entry = entry.with_alias(Some(alias));

    let outcome = ctx.store.upsert(&entry)?;

    if ctx.verbose {
        if let Some(stored) = ctx.store.get(outcome.id())? {
            print!("{}", render::record(&stored));
        }
    }

    let verb = if outcome.is_created() { "added" } else { "updated" };
    output::success(&format!("{} {}", verb, output::key(&entry.key)));
    Ok(())
}
