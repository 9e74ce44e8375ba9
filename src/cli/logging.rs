//! Tracing setup for the `dem` binary.
//!
//! Two layers: a terse stderr layer controlled by `DEM_LOG` or `-v`, and an
//! append-only file layer at `<home>/dem.log` recording `info` and above.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::constants;

/// Install the global subscriber.
///
/// Call once, before any command runs. A log file that cannot be opened is
/// reported and skipped.
pub fn init(verbose: bool, home: &Path) {
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("dem=debug")
        } else {
            EnvFilter::new("dem=warn")
        }
    });

    let path = log_file(home);
    let (file, file_error) = match open_log(&path) {
        Ok(file) => (Some(file), None),
        Err(e) => (None, Some(e)),
    };

    let file_layer = file.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .with_filter(EnvFilter::new("dem=info"))
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!(path = %path.display(), error = %e, "log file unavailable");
    }
}

fn open_log(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Log file location for a data directory.
pub fn log_file(home: &Path) -> PathBuf {
    home.join(constants::LOG_FILE)
}
