//! Locating the ffmpeg and ffprobe executables.
//!
//! A copy bundled next to the running program wins over one found on `PATH`.
//! Resolution itself never fails: when nothing is found the bare name is
//! returned and [`ToolPaths::verify`] reports the problem.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};

/// The two external tools vidmerge drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Ffmpeg,
    Ffprobe,
}

impl Tool {
    pub fn executable_name(self) -> &'static str {
        match self {
            Tool::Ffmpeg => "ffmpeg",
            Tool::Ffprobe => "ffprobe",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable_name())
    }
}

/// Directory holding the running executable, if it can be determined.
pub fn program_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Candidate paths for `name`, in resolution order.
///
/// With a base directory the list is `base/name<EXE_SUFFIX>`, `base/name`
/// (deduplicated on platforms without a suffix) and finally the bare name.
pub fn candidates(name: &str, base_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Some(base) = base_dir {
        let suffix = env::consts::EXE_SUFFIX;
        if !suffix.is_empty() {
            out.push(base.join(format!("{name}{suffix}")));
        }
        out.push(base.join(name));
    }
    out.push(PathBuf::from(name));
    out
}

/// Returns true when `candidate` exists as a file or resolves on `PATH`.
pub fn is_invocable(candidate: &Path) -> bool {
    candidate.is_file() || which::which(candidate).is_ok()
}

/// Resolves `name` against `base_dir` and then `PATH`.
///
/// Returns the first invocable candidate, or the bare name when none is.
pub fn resolve_tool_in(name: &str, base_dir: Option<&Path>) -> PathBuf {
    for candidate in candidates(name, base_dir) {
        if is_invocable(&candidate) {
            log::debug!("Resolved {} to {}", name, candidate.display());
            return candidate;
        }
    }
    log::debug!("{name} not found next to the program or on PATH");
    PathBuf::from(name)
}

/// Resolves a tool next to the running program, then on `PATH`.
pub fn resolve_tool(tool: Tool) -> PathBuf {
    resolve_tool_in(tool.executable_name(), program_dir().as_deref())
}

/// Resolved locations of both tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
}

impl ToolPaths {
    /// Resolves both tools, honouring explicit paths from the configuration.
    pub fn resolve(config: &CoreConfig) -> Self {
        Self {
            ffmpeg: config
                .ffmpeg_path
                .clone()
                .unwrap_or_else(|| resolve_tool(Tool::Ffmpeg)),
            ffprobe: config
                .ffprobe_path
                .clone()
                .unwrap_or_else(|| resolve_tool(Tool::Ffprobe)),
        }
    }

    /// Fails with [`CoreError::ToolMissing`] for the first tool that cannot
    /// be invoked.
    pub fn verify(&self) -> CoreResult<()> {
        for (tool, path) in [(Tool::Ffmpeg, &self.ffmpeg), (Tool::Ffprobe, &self.ffprobe)] {
            if !is_invocable(path) {
                log::error!("{} is not available at {}", tool, path.display());
                return Err(CoreError::ToolMissing(
                    path.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| tool.to_string()),
                ));
            }
        }
        Ok(())
    }
}
