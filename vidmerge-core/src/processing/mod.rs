//! Merge pipeline: probe, decide, execute.
//!
//! [`merge_videos`] is the single entry point used by the session. It probes
//! the inputs, picks a [`MergeStrategy`], resolves the video encoder once for
//! a re-encode, and runs the matching executor.

/// Concat demuxer executors and command builders
pub mod concat;

/// Stream-copy compatibility decision
pub mod compatibility;

/// Normalized per-file stream descriptions
pub mod signature;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{FfmpegSpawner, FfprobeExecutor};
use crate::hardware_encode::{EncoderCatalog, VideoEncoder, select_video_encoder};

pub use compatibility::{MergeStrategy, all_same_format, choose_strategy, select_strategy};
pub use concat::{concat_copy, concat_reencode};
pub use signature::{AudioSignature, StreamSignature, VideoSignature};

/// What a finished merge did.
#[derive(Debug, Clone)]
pub struct MergeReport {
    pub strategy: MergeStrategy,
    /// Encoder class, present only for re-encodes
    pub encoder: Option<VideoEncoder>,
    /// Inputs in the order they were merged
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub duration: Duration,
    pub output_size: u64,
}

impl MergeReport {
    /// User-facing one-line summary of how the merge was done.
    pub fn summary(&self) -> String {
        match (self.strategy, self.encoder) {
            (MergeStrategy::StreamCopy, _) => "Merged without re-encoding (stream copy)".to_string(),
            (MergeStrategy::ReEncode, Some(encoder)) => {
                format!("Merged with re-encoding ({})", encoder.label())
            }
            (MergeStrategy::ReEncode, None) => "Merged with re-encoding".to_string(),
        }
    }
}

/// Rejects outputs that cannot be written or would clobber an input.
pub fn validate_output(files: &[PathBuf], output: &Path) -> CoreResult<()> {
    if output.as_os_str().is_empty() || output.file_name().is_none() {
        return Err(CoreError::InvalidOutput(format!(
            "'{}' does not name a file",
            output.display()
        )));
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(CoreError::InvalidOutput(format!(
                "directory '{}' does not exist",
                parent.display()
            )));
        }
    }

    let canonical_output = output.canonicalize().ok();
    for file in files {
        let same = file == output
            || canonical_output
                .as_ref()
                .is_some_and(|out| file.canonicalize().ok().as_ref() == Some(out));
        if same {
            return Err(CoreError::InvalidOutput(format!(
                "'{}' is also an input file",
                output.display()
            )));
        }
    }
    Ok(())
}

/// Merges `files` (already in merge order) into `output`.
///
/// Probe errors abort before ffmpeg is started. Hardware detection runs at
/// most once and only when a re-encode is needed.
pub fn merge_videos<P, S, C>(
    probe: &P,
    spawner: &S,
    catalog: &C,
    ffmpeg: &Path,
    config: &CoreConfig,
    files: &[PathBuf],
    output: &Path,
) -> CoreResult<MergeReport>
where
    P: FfprobeExecutor + ?Sized,
    S: FfmpegSpawner,
    C: EncoderCatalog + ?Sized,
{
    if files.is_empty() {
        return Err(CoreError::NoFilesSelected);
    }
    validate_output(files, output)?;

    let start = Instant::now();
    let strategy = select_strategy(probe, files)?;

    let encoder = match strategy {
        MergeStrategy::StreamCopy => {
            concat_copy(spawner, ffmpeg, config, files, output)?;
            None
        }
        MergeStrategy::ReEncode => {
            let encoder = select_video_encoder(config, catalog);
            concat_reencode(spawner, ffmpeg, config, encoder, files, output)?;
            Some(encoder)
        }
    };

    let output_size = std::fs::metadata(output)
        .map_err(|e| {
            log::error!(
                "ffmpeg exited successfully but {} cannot be read: {}",
                output.display(),
                e
            );
            CoreError::Io(e)
        })?
        .len();

    Ok(MergeReport {
        strategy,
        encoder,
        inputs: files.to_vec(),
        output: output.to_path_buf(),
        duration: start.elapsed(),
        output_size,
    })
}
