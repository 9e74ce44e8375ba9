//! dem - A scoped key-value configuration store.

use clap::Parser;

use dem::cli::{execute, logging, output, Cli};
use dem::core::config;
use dem::error::{EntryError, Error, EXIT_FAILURE, EXIT_FATAL};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; anything else is a
            // usage error.
            let code = if e.use_stderr() { EXIT_FAILURE } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let home = match config::home_dir() {
        Ok(home) => home,
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(EXIT_FATAL);
        }
    };

    logging::init(cli.verbose, &home);

    if let Err(e) = execute(cli, &home) {
        report(&e);
        let code = e.exit_code();
        if code == EXIT_FATAL {
            tracing::error!(error = %e, "aborting");
        }
        std::process::exit(code);
    }
}

fn report(e: &Error) {
    output::error(&e.to_string());

    if let Error::Entry(EntryError::Ambiguous { candidates, .. }) = e {
        for entry in candidates {
            output::list_item(&format!("{} = {} ({})", entry.key, entry.value, entry.scope));
        }
    }

    if let Some(hint) = e.hint() {
        output::hint(hint);
    }
}
