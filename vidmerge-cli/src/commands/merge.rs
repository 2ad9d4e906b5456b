//! Implementation of the `merge` subcommand.
//!
//! Resolves the tools, discovers and orders the inputs, then hands the
//! selection to the core merge session and reports how it was merged.

use crate::cli::MergeArgs;
use crate::error::CliResult;
use crate::terminal;

use std::path::{Path, PathBuf};
use vidmerge_core::utils::display_name;
use vidmerge_core::{CoreConfig, CoreConfigBuilder, CoreError, MergeSession, format_bytes, format_duration};

use super::{apply_tool_args, discover_inputs, print_file_order};

/// Appends `.mp4` when `output` has no extension.
pub fn normalize_output_path(output: &Path) -> PathBuf {
    if output.extension().is_some() {
        output.to_path_buf()
    } else {
        output.with_extension("mp4")
    }
}

/// Refuses to replace an existing file unless `force` is set.
pub fn check_overwrite(output: &Path, force: bool) -> CliResult<()> {
    if output.exists() && !force {
        return Err(CoreError::InvalidOutput(format!(
            "'{}' already exists (use --force to overwrite)",
            output.display()
        )));
    }
    Ok(())
}

/// Creates a CoreConfig from the merge arguments.
///
/// Validation happens when the session is created.
pub fn create_core_config(args: &MergeArgs) -> CoreConfig {
    let mut builder = apply_tool_args(CoreConfigBuilder::new(), &args.tools).hw_accel(args.hwaccel);

    if let Some(dir) = &args.temp_dir {
        builder = builder.temp_dir(dir.clone());
    }
    if let Some(cq) = args.cq {
        builder = builder.hardware_cq(cq);
    }
    if let Some(crf) = args.crf {
        builder = builder.software_crf(crf);
    }

    builder.build()
}

pub fn run_merge(args: &MergeArgs) -> CliResult<()> {
    let config = create_core_config(args);
    let mut session = MergeSession::new(config)?;

    let output = normalize_output_path(&args.output);
    check_overwrite(&output, args.force)?;

    session.select_files(discover_inputs(&args.inputs)?);

    terminal::print_section("Input files");
    print_file_order(session.selected_files());

    terminal::print_section("Merging");
    terminal::print_status("Output", &output.display().to_string(), false);
    terminal::print_status("Hardware", &session.config().hw_accel.to_string(), false);
    terminal::print_processing(&format!(
        "Joining {} file(s) into {}",
        session.selected_files().len(),
        display_name(&output)
    ));

    let report = session.merge(&output)?;

    terminal::print_success(&report.summary());
    terminal::print_status("Output size", &format_bytes(report.output_size), true);
    terminal::print_status(
        "Time",
        &format_duration(report.duration.as_secs_f64()),
        false,
    );
    log::debug!(
        "Merged {} input(s) into {} using {}",
        report.inputs.len(),
        report.output.display(),
        report.strategy
    );
    Ok(())
}
