//! Main entry point for the vidmerge CLI application.
//!
//! Parses the command line, sets up logging and dispatches to the command
//! handlers. Any error is printed once and turned into exit code 1.

use vidmerge_cli::logging::init_logging;
use vidmerge_cli::terminal;
use vidmerge_cli::{Commands, parse_cli, run_info, run_list, run_merge};

use std::process::ExitCode;

fn main() -> ExitCode {
    let cli_args = parse_cli();

    if let Err(e) = init_logging(cli_args.verbose, cli_args.log_dir.as_deref()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let result = match &cli_args.command {
        Commands::Merge(args) => run_merge(args),
        Commands::Info(args) => run_info(args),
        Commands::List(args) => run_list(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            terminal::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
