//! List command.
//!
//! Lists entries in scope, or the distinct projects, environments or
//! modules that hold entries.

use crate::cli::context::Context;
use crate::cli::{output, render};
use crate::core::store::Store;
use crate::error::Result;

/// What `dem list` enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Entries,
    Projects,
    Environments,
    Modules,
}

/// List entries or scope values.
pub fn execute(ctx: &Context, listing: Listing, json: bool) -> Result<()> {
    let names = match listing {
        Listing::Entries => return entries(ctx, json),
        Listing::Projects => ctx.store.distinct_projects()?,
        Listing::Environments => ctx.store.distinct_environments(&ctx.scope)?,
        Listing::Modules => ctx.store.distinct_modules(&ctx.scope)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        print!("{}", render::lines(&names));
    }
    Ok(())
}

fn entries(ctx: &Context, json: bool) -> Result<()> {
    let entries = ctx.store.list(&ctx.scope)?;

    if json {
        println!("{}", render::json(&entries)?);
    } else if entries.is_empty() {
        output::dimmed("No configuration items found.");
    } else if ctx.verbose {
        print!("{}", render::grouped(&entries));
    } else {
        print!("{}", render::pairs(&entries));
    }
    Ok(())
}
