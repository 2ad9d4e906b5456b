//! Stream-copy and re-encode concatenation through ffmpeg's concat demuxer.
//!
//! Both executors follow the same shape: write the list file, run one ffmpeg
//! invocation, remove the list file whatever the outcome, then turn a
//! non-zero exit into [`CoreError::Merge`].

use std::path::{Path, PathBuf};

use ffmpeg_sidecar::command::FfmpegCommand;

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::ffmpeg_executor::{FfmpegSpawner, run_ffmpeg};
use crate::hardware_encode::VideoEncoder;
use crate::temp_files::{create_concat_list, remove_concat_list};

use super::compatibility::MergeStrategy;

const STREAM_COPY_FALLBACK: &str = "stream-copy concatenation failed";
const REENCODE_FALLBACK: &str = "re-encode concatenation failed";

/// Starts an ffmpeg command reading `list` through the concat demuxer.
fn concat_input(ffmpeg: &Path, list: &Path) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new_with_path(ffmpeg);
    cmd.arg("-y")
        .args(["-f", "concat", "-safe", "0"])
        .arg("-i")
        .arg(list);
    cmd
}

/// `ffmpeg -y -f concat -safe 0 -i <list> -c copy -movflags +faststart <output>`
pub fn build_stream_copy_command(ffmpeg: &Path, list: &Path, output: &Path) -> FfmpegCommand {
    let mut cmd = concat_input(ffmpeg, list);
    cmd.args(["-c", "copy"])
        .args(["-movflags", "+faststart"])
        .arg(output);
    cmd
}

/// Concat input, video args for `encoder`, fixed audio codec/bitrate and
/// fast-start.
pub fn build_reencode_command(
    ffmpeg: &Path,
    list: &Path,
    output: &Path,
    encoder: VideoEncoder,
    config: &CoreConfig,
) -> FfmpegCommand {
    let mut cmd = concat_input(ffmpeg, list);
    cmd.args(encoder.ffmpeg_video_args(config))
        .args(["-c:a", config.audio_codec.as_str()])
        .args(["-b:a", config.audio_bitrate.as_str()])
        .args(["-movflags", "+faststart"])
        .arg(output);
    cmd
}

/// Writes the list file, runs the command built by `build`, and always
/// removes the list file afterwards.
fn run_with_list<S, B>(
    spawner: &S,
    config: &CoreConfig,
    files: &[PathBuf],
    strategy: MergeStrategy,
    fallback: &str,
    build: B,
) -> CoreResult<()>
where
    S: FfmpegSpawner,
    B: FnOnce(&Path) -> FfmpegCommand,
{
    let list = create_concat_list(config.temp_dir.as_deref(), files)?;
    let cmd = build(list.path());
    let result = run_ffmpeg(spawner, cmd);
    remove_concat_list(list);

    let run = result?;
    if run.success() {
        return Ok(());
    }

    let diagnostics = run.diagnostic_text();
    log::error!("ffmpeg {} merge failed with {}", strategy, run.status);
    Err(CoreError::Merge {
        strategy,
        code: run.status.code(),
        message: if diagnostics.is_empty() {
            fallback.to_string()
        } else {
            diagnostics
        },
    })
}

/// Joins `files` into `output` without re-encoding.
pub fn concat_copy<S: FfmpegSpawner>(
    spawner: &S,
    ffmpeg: &Path,
    config: &CoreConfig,
    files: &[PathBuf],
    output: &Path,
) -> CoreResult<()> {
    log::info!("Concatenating {} file(s) with stream copy", files.len());
    run_with_list(
        spawner,
        config,
        files,
        MergeStrategy::StreamCopy,
        STREAM_COPY_FALLBACK,
        |list| build_stream_copy_command(ffmpeg, list, output),
    )
}

/// Joins `files` into `output`, re-encoding video with `encoder` and audio
/// with the configured codec.
pub fn concat_reencode<S: FfmpegSpawner>(
    spawner: &S,
    ffmpeg: &Path,
    config: &CoreConfig,
    encoder: VideoEncoder,
    files: &[PathBuf],
    output: &Path,
) -> CoreResult<()> {
    log::info!(
        "Concatenating {} file(s) with re-encode ({})",
        files.len(),
        encoder
    );
    run_with_list(
        spawner,
        config,
        files,
        MergeStrategy::ReEncode,
        REENCODE_FALLBACK,
        |list| build_reencode_command(ffmpeg, list, output, encoder, config),
    )
}
