//! Diagnostic logging setup.
//!
//! The terminal belongs to the user interface while the game runs, so log records can only go to a
//! file. When no file is requested no logger is installed and every `log` macro is a no-op.

use std::{fs::File, path::Path};

use color_eyre::eyre::{Result, WrapErr as _};
use env_logger::{Builder, Env, Target};

/// Default filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Installs a file-backed logger, if a log file was requested.
///
/// # Errors
///
/// This function fails if the log file cannot be created or if a global logger is already set.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .wrap_err_with(|| format!("could not create log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .wrap_err("failed to install the logger")?;

    log::info!("logging to {}", path.display());

    Ok(())
}
