//! Deciding whether a set of files can be joined by stream copy.
//!
//! Stream copy is only safe when every input has the same codec, geometry,
//! timing base and channel layout as the first one; otherwise the files are
//! re-encoded.

use std::fmt;
use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};
use crate::external::FfprobeExecutor;

use super::signature::StreamSignature;

/// How a merge job is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Concat demuxer with `-c copy`, no re-encoding.
    StreamCopy,
    /// Concat demuxer with video and audio re-encoded.
    ReEncode,
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeStrategy::StreamCopy => f.write_str("stream-copy"),
            MergeStrategy::ReEncode => f.write_str("re-encode"),
        }
    }
}

/// Pure strategy decision from already probed signatures.
///
/// StreamCopy iff every signature equals the first. An empty slice is
/// trivially uniform.
pub fn choose_strategy(signatures: &[StreamSignature]) -> MergeStrategy {
    match signatures.split_first() {
        Some((first, rest)) if rest.iter().any(|s| s != first) => MergeStrategy::ReEncode,
        _ => MergeStrategy::StreamCopy,
    }
}

/// Probes `files` in order and reports whether all match the first file.
///
/// Stops probing at the first mismatch. A probe failure is returned as an
/// error, never treated as a mismatch.
pub fn all_same_format<P: FfprobeExecutor + ?Sized>(
    probe: &P,
    files: &[PathBuf],
) -> CoreResult<bool> {
    let (first, rest) = files.split_first().ok_or(CoreError::NoFilesSelected)?;

    let reference = probe.probe_signature(first)?;
    log::debug!("Reference signature ({}): {:?}", first.display(), reference);

    for file in rest {
        let signature = probe.probe_signature(file)?;
        if signature != reference {
            log::info!(
                "{} differs from {}: {} vs {}",
                file.display(),
                first.display(),
                signature.describe(),
                reference.describe()
            );
            return Ok(false);
        }
    }
    Ok(true)
}

/// Selects the merge strategy for `files` by probing them.
pub fn select_strategy<P: FfprobeExecutor + ?Sized>(
    probe: &P,
    files: &[PathBuf],
) -> CoreResult<MergeStrategy> {
    let strategy = if all_same_format(probe, files)? {
        MergeStrategy::StreamCopy
    } else {
        MergeStrategy::ReEncode
    };
    log::info!("Merge strategy: {strategy}");
    Ok(strategy)
}
