//! Command-line interface.

pub mod add;
pub mod completions;
pub mod context;
pub mod delete;
pub mod get;
pub mod list;
pub mod logging;
pub mod output;
pub mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::constants::{DB_ENV, DEFAULT_CONFIG_TYPE, DEFAULT_SCOPE};
use crate::core::domain::Scope;
use crate::error::Result;
use context::Context;
use list::Listing;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n",
    env!("CARGO_PKG_DESCRIPTION"),
    "\nRepository: ",
    env!("CARGO_PKG_REPOSITORY"),
);

/// dem - A scoped key-value configuration store.
#[derive(Parser)]
#[command(
    name = "dem",
    about = "Key-value configuration management across projects, environments and modules",
    version,
    long_version = LONG_VERSION,
    after_help = "Scope flags default to \"default\", which matches any value when reading."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Project name
    #[arg(short, long, global = true, default_value = DEFAULT_SCOPE)]
    pub project: String,

    /// Environment (dev, test, pre, prod, ...)
    #[arg(short, long = "env", global = true, default_value = DEFAULT_SCOPE)]
    pub env: String,

    /// Module name
    #[arg(short, long, global = true, default_value = DEFAULT_SCOPE)]
    pub module: String,

    /// Verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (defaults to ~/.dem/dem_config.db)
    #[arg(long, global = true, env = DB_ENV, value_name = "PATH")]
    pub db: Option<PathBuf>,
}

impl Cli {
    /// Scope selected by the global flags.
    pub fn scope(&self) -> Scope {
        Scope::new(&self.project, &self.env, &self.module)
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add or update a configuration entry
    #[command(visible_alias = "create")]
    Add {
        /// Configuration key (e.g., db.host)
        key: String,
        /// Value; remaining arguments are joined with spaces
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        value: Vec<String>,
        /// Custom alias (defaults to the auto-alias, e.g. d.h for db.host)
        #[arg(short, long)]
        alias: Option<String>,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
        /// Type tag stored with the entry
        #[arg(long = "type", default_value = DEFAULT_CONFIG_TYPE)]
        config_type: String,
        /// Display order hint
        #[arg(long)]
        sort_order: Option<i64>,
    },

    /// Get a value by key, alias or auto-alias
    #[command(visible_alias = "retrieve")]
    Get {
        /// Key, alias or auto-alias
        key: String,
        /// Output matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a configuration entry
    #[command(visible_alias = "remove")]
    Delete {
        /// Key, alias or auto-alias
        key: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List entries in scope
    #[command(visible_alias = "ls")]
    List {
        /// List distinct projects instead
        #[arg(short = 'P', long, group = "enumerate")]
        projects: bool,
        /// List distinct environments instead
        #[arg(short = 'E', long, group = "enumerate")]
        envs: bool,
        /// List distinct modules instead
        #[arg(short = 'M', long, group = "enumerate")]
        modules: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command line against the data directory `home`.
///
/// The store is opened only by commands that need it.
pub fn execute(cli: Cli, home: &Path) -> Result<()> {
    let scope = cli.scope();
    let Cli {
        command,
        verbose,
        db,
        ..
    } = cli;

    let open = move || -> Result<Context> {
        scope.validate()?;
        Context::open(home, db.as_deref(), scope, verbose)
    };

    match command {
        Command::Add {
            key,
            value,
            alias,
            description,
            config_type,
            sort_order,
        } => add::execute(
            &mut open()?,
            add::AddArgs {
                key,
                value,
                alias,
                description,
                config_type,
                sort_order,
            },
        ),
        Command::Get { key, json } => get::execute(&open()?, &key, json),
        Command::Delete { key, yes } => delete::execute(&mut open()?, &key, yes),
        Command::List {
            projects,
            envs,
            modules,
            json,
        } => {
            let listing = if projects {
                Listing::Projects
            } else if envs {
                Listing::Environments
            } else if modules {
                Listing::Modules
            } else {
                Listing::Entries
            };
            list::execute(&open()?, listing, json)
        }
        Command::Completions { shell } => completions::execute(shell),
    }
}
