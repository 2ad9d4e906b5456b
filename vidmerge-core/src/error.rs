//! Error types for the vidmerge-core library.
//!
//! Every fallible operation in the crate returns [`CoreResult`]. The three
//! error kinds a user sees most are [`CoreError::ToolMissing`] (startup),
//! [`CoreError::Probe`] (metadata could not be read) and [`CoreError::Merge`]
//! (ffmpeg rejected the concatenation).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::processing::MergeStrategy;

/// Custom error types for vidmerge
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Required tool not found: {0}. Place ffmpeg/ffprobe next to the program or add them to PATH")]
    ToolMissing(String),

    #[error("ffprobe failed on file: {}\n{message}", path.display())]
    Probe { path: PathBuf, message: String },

    #[error("{strategy} merge failed{}: {message}", code.map(|c| format!(" (exit code {c})")).unwrap_or_default())]
    Merge {
        strategy: MergeStrategy,
        code: Option<i32>,
        message: String,
    },

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed to wait for command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("No video files selected")]
    NoFilesSelected,

    #[error("Invalid output path: {0}")]
    InvalidOutput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for vidmerge operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

pub fn command_wait_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}

/// Builds a [`CoreError::Probe`] for `path`.
pub fn probe_error(path: impl Into<PathBuf>, message: impl Into<String>) -> CoreError {
    CoreError::Probe {
        path: path.into(),
        message: message.into(),
    }
}
