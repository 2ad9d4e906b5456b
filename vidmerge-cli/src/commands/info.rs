//! Implementation of the `info` subcommand.
//!
//! Probes every input, prints its stream signature and tells the user whether
//! the set could be joined without re-encoding.

use crate::cli::InfoArgs;
use crate::error::CliResult;
use crate::terminal;

use vidmerge_core::processing::MergeStrategy;
use vidmerge_core::utils::display_name;
use vidmerge_core::{CoreConfigBuilder, MergeSession};

use super::{apply_tool_args, discover_inputs};

pub fn run_info(args: &InfoArgs) -> CliResult<()> {
    let config = apply_tool_args(CoreConfigBuilder::new(), &args.tools).build();
    let mut session = MergeSession::new(config)?;
    session.select_files(discover_inputs(&args.inputs)?);

    let report = session.inspect()?;

    terminal::print_section("Stream parameters");
    for (file, signature) in &report.files {
        terminal::print_processing(&display_name(file));
        terminal::print_sub_item(&signature.describe());
    }

    terminal::print_section("Summary");
    terminal::print_status("Files", &report.files.len().to_string(), false);
    match report.strategy {
        MergeStrategy::StreamCopy => {
            terminal::print_status("Merge", "stream copy (no re-encoding)", true)
        }
        MergeStrategy::ReEncode => {
            terminal::print_status("Merge", "re-encode (stream parameters differ)", true)
        }
    }
    Ok(())
}
