// ============================================================================
// vidmerge-cli/src/logging.rs
// ============================================================================
//
// LOGGING: fern setup for console and optional file output
//
// Informational records are the user-facing output and go to stdout as plain
// messages; warnings and errors go to stderr. When a log directory is given,
// every record is also written there with a timestamp and level, with any
// terminal styling removed.

use crate::error::{CliErrorContext, CliResult};

use log::{Level, LevelFilter};
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("vidmerge_run_{}.log", vidmerge_cli::logging::get_timestamp());
/// assert!(log_filename.starts_with("vidmerge_run_"));
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Name of the log file for a run started now.
pub fn log_file_name() -> String {
    format!("vidmerge_run_{}.log", get_timestamp())
}

fn console_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger.
///
/// Returns the path of the log file when `log_dir` is given.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> CliResult<Option<PathBuf>> {
    let console = fern::Dispatch::new()
        .level(console_level(verbose))
        .format(|out, message, record| match record.level() {
            Level::Info | Level::Warn | Level::Error => out.finish(format_args!("{message}")),
            level => out.finish(format_args!("[{level}] {message}")),
        })
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| metadata.level() > Level::Warn)
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .level(LevelFilter::Warn)
                .chain(std::io::stderr()),
        );

    let mut root = fern::Dispatch::new().chain(console);

    let log_path = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).cli_with_context(|| {
                format!("Failed to create log directory {}", dir.display())
            })?;
            let path = dir.join(log_file_name());
            let file = fern::log_file(&path)
                .cli_with_context(|| format!("Failed to open log file {}", path.display()))?;

            root = root.chain(
                fern::Dispatch::new()
                    .level(LevelFilter::Debug)
                    .format(|out, message, record| {
                        let text = message.to_string();
                        out.finish(format_args!(
                            "{} {:<5} [{}] {}",
                            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                            record.level(),
                            record.target(),
                            console::strip_ansi_codes(&text)
                        ))
                    })
                    .chain(file),
            );
            Some(path)
        }
        None => None,
    };

    root.apply().map_err(|e| {
        vidmerge_core::CoreError::OperationFailed(format!("Failed to initialise logging: {e}"))
    })?;

    if let Some(path) = &log_path {
        log::debug!("Logging to {}", path.display());
    }
    if verbose {
        log::debug!("Debug level logging enabled");
    }
    Ok(log_path)
}
