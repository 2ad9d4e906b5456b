//! FFprobe integration for reading stream signatures.
//!
//! This module runs ffprobe once per file, asking only for the stream fields
//! that take part in the compatibility check, and turns the JSON answer into
//! a [`StreamSignature`].

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{CoreResult, probe_error};
use crate::processing::signature::{PROBE_STREAM_ENTRIES, StreamSignature};

/// Trait for anything that can produce a [`StreamSignature`] for a file.
pub trait FfprobeExecutor {
    /// Probes `input_path` and returns its normalized stream signature.
    fn probe_signature(&self, input_path: &Path) -> CoreResult<StreamSignature>;
}

/// Concrete implementation of [`FfprobeExecutor`] that spawns ffprobe.
#[derive(Debug, Clone)]
pub struct CommandFfprobeExecutor {
    ffprobe_path: PathBuf,
}

impl CommandFfprobeExecutor {
    pub fn new(ffprobe_path: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
        }
    }

    /// Builds the ffprobe invocation for `input_path`.
    pub fn build_command(&self, input_path: &Path) -> Command {
        let mut cmd = Command::new(&self.ffprobe_path);
        cmd.args(["-v", "error", "-show_entries"])
            .arg(format!("stream={PROBE_STREAM_ENTRIES}"))
            .args(["-of", "json"])
            .arg(input_path);
        cmd
    }
}

impl FfprobeExecutor for CommandFfprobeExecutor {
    fn probe_signature(&self, input_path: &Path) -> CoreResult<StreamSignature> {
        log::debug!("Running ffprobe for stream signature on: {}", input_path.display());

        let output = self.build_command(input_path).output().map_err(|e| {
            probe_error(
                input_path,
                format!("could not run {}: {e}", self.ffprobe_path.display()),
            )
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::error!(
                "ffprobe failed on {} ({}): {}",
                input_path.display(),
                output.status,
                stderr
            );
            return Err(probe_error(input_path, stderr));
        }

        StreamSignature::from_probe_json(&output.stdout).map_err(|e| {
            log::error!("Unparseable ffprobe output for {}: {}", input_path.display(), e);
            probe_error(input_path, format!("failed to parse ffprobe output: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn command_requests_json_with_fixed_entries() {
        let exec = CommandFfprobeExecutor::new("/opt/ffprobe");
        let cmd = exec.build_command(Path::new("/videos/clip1.mp4"));
        assert_eq!(cmd.get_program(), "/opt/ffprobe");
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec![
                "-v".to_string(),
                "error".to_string(),
                "-show_entries".to_string(),
                format!("stream={PROBE_STREAM_ENTRIES}"),
                "-of".to_string(),
                "json".to_string(),
                "/videos/clip1.mp4".to_string(),
            ]
        );
    }

    #[test]
    fn missing_ffprobe_is_a_probe_error() {
        let exec = CommandFfprobeExecutor::new("vidmerge-no-such-ffprobe-42");
        match exec.probe_signature(Path::new("clip.mp4")) {
            Err(CoreError::Probe { path, message }) => {
                assert_eq!(path, PathBuf::from("clip.mp4"));
                assert!(message.contains("vidmerge-no-such-ffprobe-42"));
            }
            other => panic!("expected probe error, got {other:?}"),
        }
    }
}
