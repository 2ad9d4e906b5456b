//! Library component for the vidmerge CLI application.
//!
//! Holds the argument definitions, command logic and output helpers that the
//! binary uses, so they can be tested without spawning the program.

/// Command-line interface definitions using clap
pub mod cli;

/// Command implementations for each subcommand
pub mod commands;

/// Error handling utilities for the CLI
pub mod error;

/// Logging setup and helper functions
pub mod logging;

/// Styled terminal output
pub mod terminal;

// Re-exports for convenience
pub use cli::{Cli, Commands, InfoArgs, ListArgs, MergeArgs, parse_cli, parse_cli_from};
pub use commands::info::run_info;
pub use commands::list::run_list;
pub use commands::merge::run_merge;
