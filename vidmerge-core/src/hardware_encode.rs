//! Hardware encoder detection and video encoder selection.
//!
//! Hardware encoding is only ever used for re-encodes. Availability is
//! decided by asking ffmpeg for its compiled-in encoder list and looking for
//! the configured hardware encoder (`h264_nvenc` by default).

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{CoreConfig, HwAccelMode};

/// Anything that can answer "does this ffmpeg build have encoder X?".
pub trait EncoderCatalog {
    fn has_encoder(&self, encoder: &str) -> bool;
}

/// [`EncoderCatalog`] backed by `ffmpeg -hide_banner -encoders`.
#[derive(Debug, Clone)]
pub struct FfmpegEncoderCatalog {
    ffmpeg_path: PathBuf,
}

impl FfmpegEncoderCatalog {
    pub fn new(ffmpeg_path: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }
}

impl EncoderCatalog for FfmpegEncoderCatalog {
    fn has_encoder(&self, encoder: &str) -> bool {
        is_encoder_available(&self.ffmpeg_path, encoder)
    }
}

/// Runs `ffmpeg -hide_banner -encoders` and checks the listing for `encoder`.
///
/// Any failure to run ffmpeg counts as "not available".
pub fn is_encoder_available(ffmpeg: &Path, encoder: &str) -> bool {
    let output = Command::new(ffmpeg)
        .args(["-hide_banner", "-encoders"])
        .output();

    match output {
        Ok(out) if out.status.success() => {
            encoder_listing_contains(&String::from_utf8_lossy(&out.stdout), encoder)
        }
        Ok(out) => {
            log::debug!("ffmpeg -encoders exited with {}", out.status);
            false
        }
        Err(e) => {
            log::debug!("Could not run {} -encoders: {}", ffmpeg.display(), e);
            false
        }
    }
}

/// True when `encoder` appears as a whole word in an `-encoders` listing.
pub fn encoder_listing_contains(listing: &str, encoder: &str) -> bool {
    listing
        .lines()
        .flat_map(str::split_whitespace)
        .any(|token| token == encoder)
}

/// Encoder class used for a re-encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoEncoder {
    Hardware,
    Software,
}

impl VideoEncoder {
    /// Short label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            VideoEncoder::Hardware => "GPU",
            VideoEncoder::Software => "CPU",
        }
    }

    /// Video codec arguments for this encoder class.
    #[must_use]
    pub fn ffmpeg_video_args(self, config: &CoreConfig) -> Vec<String> {
        match self {
            VideoEncoder::Hardware => vec![
                "-c:v".to_string(),
                config.hardware_encoder.clone(),
                "-preset".to_string(),
                config.hardware_preset.clone(),
                "-rc".to_string(),
                config.hardware_rate_control.clone(),
                "-cq".to_string(),
                config.hardware_cq.to_string(),
            ],
            VideoEncoder::Software => vec![
                "-c:v".to_string(),
                config.software_encoder.clone(),
                "-preset".to_string(),
                config.software_preset.clone(),
                "-crf".to_string(),
                config.software_crf.to_string(),
            ],
        }
    }
}

impl fmt::Display for VideoEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Picks the encoder class for one merge job.
///
/// `Auto` consults `catalog` exactly once; the other modes never do.
pub fn select_video_encoder<C: EncoderCatalog + ?Sized>(
    config: &CoreConfig,
    catalog: &C,
) -> VideoEncoder {
    let encoder = match config.hw_accel {
        HwAccelMode::Always => VideoEncoder::Hardware,
        HwAccelMode::Never => VideoEncoder::Software,
        HwAccelMode::Auto => {
            if catalog.has_encoder(&config.hardware_encoder) {
                VideoEncoder::Hardware
            } else {
                VideoEncoder::Software
            }
        }
    };

    match encoder {
        VideoEncoder::Hardware => {
            log::info!("Video encoder: {} (hardware)", config.hardware_encoder)
        }
        VideoEncoder::Software => {
            log::info!("Video encoder: {} (software)", config.software_encoder)
        }
    }
    encoder
}
