//! File discovery for merge inputs.
//!
//! Directories are expanded to the video files in their top level, filtered
//! by the usual video extensions. Files named explicitly are taken as given,
//! whatever their extension.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Extensions offered by the video file filter (case-insensitive).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "avi", "ts", "webm", "m4v"];

/// Checks whether `path` has one of [`VIDEO_EXTENSIONS`].
#[must_use]
pub fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| VIDEO_EXTENSIONS.iter().any(|v| ext.eq_ignore_ascii_case(v)))
}

/// Finds video files in the top level of `input_dir`.
///
/// Subdirectories are not searched. The result is in directory order; sort
/// it with [`crate::ordering::sort_naturally`] before merging.
///
/// # Examples
///
/// ```rust,no_run
/// use vidmerge_core::find_video_files;
/// use std::path::Path;
///
/// let files = find_video_files(Path::new("/path/to/clips")).unwrap();
/// println!("Found {} video files", files.len());
/// ```
pub fn find_video_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to read directory '{}': {}",
            input_dir.display(),
            e
        ))
    })?;

    let files = read_dir
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            (path.is_file() && has_video_extension(&path)).then_some(path)
        })
        .collect();

    Ok(files)
}

/// Expands the user's inputs into a flat file list.
///
/// Files are kept verbatim; directories contribute their video files; an
/// input that does not exist is an error. An empty result is
/// [`CoreError::NoFilesSelected`].
pub fn expand_inputs(inputs: &[PathBuf]) -> CoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let found = find_video_files(input)?;
            if found.is_empty() {
                log::warn!("No video files found in {}", input.display());
            }
            files.extend(found);
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(CoreError::PathError(format!(
                "Input path '{}' does not exist",
                input.display()
            )));
        }
    }

    if files.is_empty() {
        Err(CoreError::NoFilesSelected)
    } else {
        Ok(files)
    }
}
