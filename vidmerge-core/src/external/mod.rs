// ============================================================================
// vidmerge-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and ffprobe
//
// This module encapsulates everything that touches the external toolkit:
// finding the executables, probing stream signatures, and spawning ffmpeg.
// The probe and spawn operations sit behind traits so the merge logic can be
// tested with in-process fakes.

/// Locating the ffmpeg and ffprobe executables
pub mod tools;

/// Traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Traits and implementations for executing ffprobe commands
pub mod ffprobe_executor;

// ----- FFmpeg Execution -----
pub use ffmpeg_executor::{
    FfmpegProcess, FfmpegRun, FfmpegSpawner, SidecarProcess, SidecarSpawner, run_ffmpeg,
};

// ----- FFprobe Execution -----
pub use ffprobe_executor::{CommandFfprobeExecutor, FfprobeExecutor};

// ----- Tool Resolution -----
pub use tools::{Tool, ToolPaths, resolve_tool};
