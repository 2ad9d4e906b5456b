// vidmerge-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vidmerge_core::HwAccelMode;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidmerge: Join video files with ffmpeg",
    long_about = "Joins video files in natural filename order. Files with identical stream \
                  parameters are joined without re-encoding; otherwise they are re-encoded, \
                  on the GPU when ffmpeg offers a hardware encoder."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output for troubleshooting
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Optional: Directory for a timestamped log file of this run
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merges video files into a single output file
    Merge(MergeArgs),
    /// Shows the stream parameters of each file and whether they can be stream-copied
    Info(InfoArgs),
    /// Lists the files in the order they would be merged
    List(ListArgs),
}

/// Locations of the external tools.
#[derive(Args, Debug, Clone, Default)]
pub struct ToolArgs {
    /// Path to the ffmpeg executable (defaults to the program directory, then PATH)
    #[arg(long, value_name = "PATH", env = "VIDMERGE_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// Path to the ffprobe executable (defaults to the program directory, then PATH)
    #[arg(long, value_name = "PATH", env = "VIDMERGE_FFPROBE")]
    pub ffprobe: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Video files and/or directories to merge
    #[arg(required = true, value_name = "INPUTS")]
    pub inputs: Vec<PathBuf>,

    /// Output file (".mp4" is appended when no extension is given)
    #[arg(short = 'o', long = "output", required = true, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Hardware encoding for re-encodes: auto, always or never
    #[arg(long, value_name = "MODE", default_value = "auto", env = "VIDMERGE_HWACCEL")]
    pub hwaccel: HwAccelMode,

    #[command(flatten)]
    pub tools: ToolArgs,

    /// Optional: Directory for the temporary concat list
    #[arg(long, value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long, default_value_t = false)]
    pub force: bool,

    // --- Quality Overrides ---
    /// Optional: Override the constant quality value for hardware re-encodes (0-51)
    #[arg(long, value_name = "CQ", value_parser = clap::value_parser!(u8).range(0..=51))]
    pub cq: Option<u8>,

    /// Optional: Override the CRF value for software re-encodes (0-51)
    #[arg(long, value_name = "CRF", value_parser = clap::value_parser!(u8).range(0..=51))]
    pub crf: Option<u8>,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Video files and/or directories to inspect
    #[arg(required = true, value_name = "INPUTS")]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub tools: ToolArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Video files and/or directories to list
    #[arg(required = true, value_name = "INPUTS")]
    pub inputs: Vec<PathBuf>,
}

/// Parses the process arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses an explicit argument list, for tests.
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
