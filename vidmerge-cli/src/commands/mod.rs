//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Implementation of the `merge` command.
pub mod merge;

/// Implementation of the `info` command.
pub mod info;

/// Implementation of the `list` command.
pub mod list;

use crate::cli::ToolArgs;
use crate::error::CliResult;
use crate::terminal;

use std::path::PathBuf;
use vidmerge_core::{CoreConfigBuilder, expand_inputs, sort_naturally, utils::display_name};

/// Expands the inputs and sorts them into merge order.
pub fn discover_inputs(inputs: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    let mut files = expand_inputs(inputs)?;
    sort_naturally(&mut files);
    log::debug!("Discovered {} input file(s)", files.len());
    Ok(files)
}

/// Applies explicit tool locations to a config builder.
pub(crate) fn apply_tool_args(mut builder: CoreConfigBuilder, tools: &ToolArgs) -> CoreConfigBuilder {
    if let Some(ffmpeg) = &tools.ffmpeg {
        builder = builder.ffmpeg_path(ffmpeg.clone());
    }
    if let Some(ffprobe) = &tools.ffprobe {
        builder = builder.ffprobe_path(ffprobe.clone());
    }
    builder
}

/// Prints the numbered merge order.
pub(crate) fn print_file_order(files: &[PathBuf]) {
    let width = files.len().to_string().len();
    for (i, file) in files.iter().enumerate() {
        terminal::print_sub_item(&format!("{:>width$}. {}", i + 1, display_name(file)));
    }
}
