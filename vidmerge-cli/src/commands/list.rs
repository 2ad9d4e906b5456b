//! Implementation of the `list` subcommand.
//!
//! Shows the order a merge would use without touching ffmpeg or ffprobe.

use crate::cli::ListArgs;
use crate::error::CliResult;
use crate::terminal;

use super::{discover_inputs, print_file_order};

pub fn run_list(args: &ListArgs) -> CliResult<()> {
    let files = discover_inputs(&args.inputs)?;

    terminal::print_section("Merge order");
    print_file_order(&files);
    Ok(())
}
