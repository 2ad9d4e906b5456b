//! Configuration structures and constants for the vidmerge-core library.
//!
//! This module provides the configuration for a merge: tool locations, the
//! hardware-acceleration policy, and the encoder parameters used when the
//! inputs have to be re-encoded.

mod builder;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

pub use builder::CoreConfigBuilder;

// Default constants

/// Hardware H.264 encoder probed for in `ffmpeg -encoders`.
pub const DEFAULT_HARDWARE_ENCODER: &str = "h264_nvenc";

/// NVENC preset. `p4` is the balanced member of the p1-p7 range.
pub const DEFAULT_HARDWARE_PRESET: &str = "p4";

/// NVENC rate control mode used together with `-cq`.
pub const DEFAULT_HARDWARE_RATE_CONTROL: &str = "vbr_hq";

/// Constant quality value for the hardware encoder.
pub const DEFAULT_HARDWARE_CQ: u8 = 19;

/// Software fallback encoder.
pub const DEFAULT_SOFTWARE_ENCODER: &str = "libx264";

/// x264 preset for the software fallback.
pub const DEFAULT_SOFTWARE_PRESET: &str = "veryfast";

/// CRF value for the software encoder. Range 0-51, lower is higher quality.
pub const DEFAULT_SOFTWARE_CRF: u8 = 19;

/// Audio codec used whenever the inputs are re-encoded.
pub const DEFAULT_AUDIO_CODEC: &str = "aac";

/// Audio bitrate used whenever the inputs are re-encoded.
pub const DEFAULT_AUDIO_BITRATE: &str = "192k";

/// Upper bound accepted for CRF/CQ values.
pub const MAX_QUALITY_VALUE: u8 = 51;

/// Whether a re-encode may use the hardware encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HwAccelMode {
    /// Use the hardware encoder when `ffmpeg -encoders` lists it.
    #[default]
    Auto,
    /// Always use the hardware encoder without probing for it.
    Always,
    /// Never use the hardware encoder.
    Never,
}

impl fmt::Display for HwAccelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HwAccelMode::Auto => "auto",
            HwAccelMode::Always => "always",
            HwAccelMode::Never => "never",
        };
        f.write_str(s)
    }
}

impl FromStr for HwAccelMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(HwAccelMode::Auto),
            "always" | "on" => Ok(HwAccelMode::Always),
            "never" | "off" => Ok(HwAccelMode::Never),
            other => Err(CoreError::Config(format!(
                "unknown hardware acceleration mode '{other}' (expected auto, always or never)"
            ))),
        }
    }
}

/// Main configuration structure for the vidmerge-core library.
///
/// All fields have defaults matching the constants above, so
/// `CoreConfig::default()` is a complete configuration. The builder provides
/// a fluent way to override individual fields.
///
/// # Examples
///
/// ```rust
/// use vidmerge_core::config::{CoreConfigBuilder, HwAccelMode};
///
/// let config = CoreConfigBuilder::new()
///     .hw_accel(HwAccelMode::Never)
///     .software_crf(21)
///     .build();
/// assert_eq!(config.software_crf, 21);
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Explicit ffmpeg path; bypasses tool resolution when set
    pub ffmpeg_path: Option<PathBuf>,

    /// Explicit ffprobe path; bypasses tool resolution when set
    pub ffprobe_path: Option<PathBuf>,

    /// Directory for concat list files (defaults to the system temp dir)
    pub temp_dir: Option<PathBuf>,

    pub hw_accel: HwAccelMode,

    pub hardware_encoder: String,
    pub hardware_preset: String,
    pub hardware_rate_control: String,
    pub hardware_cq: u8,

    pub software_encoder: String,
    pub software_preset: String,
    pub software_crf: u8,

    pub audio_codec: String,
    pub audio_bitrate: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: None,
            ffprobe_path: None,
            temp_dir: None,
            hw_accel: HwAccelMode::default(),
            hardware_encoder: DEFAULT_HARDWARE_ENCODER.to_string(),
            hardware_preset: DEFAULT_HARDWARE_PRESET.to_string(),
            hardware_rate_control: DEFAULT_HARDWARE_RATE_CONTROL.to_string(),
            hardware_cq: DEFAULT_HARDWARE_CQ,
            software_encoder: DEFAULT_SOFTWARE_ENCODER.to_string(),
            software_preset: DEFAULT_SOFTWARE_PRESET.to_string(),
            software_crf: DEFAULT_SOFTWARE_CRF,
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            audio_bitrate: DEFAULT_AUDIO_BITRATE.to_string(),
        }
    }
}

impl CoreConfig {
    /// Checks that the encoder settings can be turned into a valid ffmpeg
    /// command line.
    pub fn validate(&self) -> CoreResult<()> {
        let required = [
            ("hardware encoder", &self.hardware_encoder),
            ("hardware preset", &self.hardware_preset),
            ("hardware rate control", &self.hardware_rate_control),
            ("software encoder", &self.software_encoder),
            ("software preset", &self.software_preset),
            ("audio codec", &self.audio_codec),
            ("audio bitrate", &self.audio_bitrate),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::Config(format!("{name} must not be empty")));
            }
        }

        if self.hardware_cq > MAX_QUALITY_VALUE {
            return Err(CoreError::Config(format!(
                "hardware CQ {} is out of range (0-{MAX_QUALITY_VALUE})",
                self.hardware_cq
            )));
        }
        if self.software_crf > MAX_QUALITY_VALUE {
            return Err(CoreError::Config(format!(
                "software CRF {} is out of range (0-{MAX_QUALITY_VALUE})",
                self.software_crf
            )));
        }

        if let Some(dir) = &self.temp_dir {
            if !dir.is_dir() {
                return Err(CoreError::Config(format!(
                    "temp directory '{}' does not exist",
                    dir.display()
                )));
            }
        }

        Ok(())
    }
}
