//! Concat list files for ffmpeg's concat demuxer.
//!
//! A list file lives only as long as one merge invocation. It is a
//! `NamedTempFile`, so it is removed when dropped even on error paths;
//! [`remove_concat_list`] removes it explicitly and swallows failures.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder as TempFileBuilder, NamedTempFile};

use crate::error::CoreResult;
use crate::utils::absolute_path;

/// Escapes a path for a single-quoted concat demuxer entry.
///
/// The path is rendered with forward slashes and every `'` becomes `'\''`
/// (close quote, escaped quote, reopen quote).
#[must_use]
pub fn escape_concat_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    let posix = if std::path::MAIN_SEPARATOR == '\\' {
        text.replace('\\', "/")
    } else {
        text.into_owned()
    };
    posix.replace('\'', r"'\''")
}

/// Renders the full list file: one `file '<path>'` line per input.
#[must_use]
pub fn concat_list_contents(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|f| format!("file '{}'\n", escape_concat_path(f)))
        .collect()
}

/// Writes a concat list for `files` into `dir` (or the system temp dir).
///
/// The demuxer resolves relative entries against the list file's own
/// directory, so every entry is written as an absolute path.
pub fn create_concat_list(dir: Option<&Path>, files: &[PathBuf]) -> CoreResult<NamedTempFile> {
    let mut builder = TempFileBuilder::new();
    builder.prefix("vidmerge_concat_").suffix(".txt");
    let mut list = match dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            builder.tempfile_in(dir)?
        }
        None => builder.tempfile()?,
    };

    let entries: Vec<PathBuf> = files.iter().map(|f| absolute_path(f)).collect();
    list.write_all(concat_list_contents(&entries).as_bytes())?;
    list.flush()?;

    log::debug!(
        "Wrote concat list with {} entries to {}",
        files.len(),
        list.path().display()
    );
    Ok(list)
}

/// Deletes a concat list, logging but otherwise ignoring failures.
pub fn remove_concat_list(list: NamedTempFile) {
    let path = list.path().to_path_buf();
    if let Err(e) = list.close() {
        log::debug!("Could not remove concat list {}: {}", path.display(), e);
    }
}
