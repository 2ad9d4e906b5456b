// ============================================================================
// vidmerge-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Every setter overrides a single field;
// anything left alone keeps the value from CoreConfig::default().

use std::path::PathBuf;

use super::{CoreConfig, HwAccelMode};

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use vidmerge_core::config::{CoreConfigBuilder, HwAccelMode};
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .ffmpeg_path(PathBuf::from("/opt/ffmpeg/bin/ffmpeg"))
///     .hw_accel(HwAccelMode::Always)
///     .audio_bitrate("256k")
///     .build();
/// assert_eq!(config.audio_bitrate, "256k");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit ffmpeg executable, skipping tool resolution.
    pub fn ffmpeg_path(mut self, path: PathBuf) -> Self {
        self.config.ffmpeg_path = Some(path);
        self
    }

    /// Sets an explicit ffprobe executable, skipping tool resolution.
    pub fn ffprobe_path(mut self, path: PathBuf) -> Self {
        self.config.ffprobe_path = Some(path);
        self
    }

    /// Sets the directory where concat list files are created.
    pub fn temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.config.temp_dir = Some(temp_dir);
        self
    }

    pub fn hw_accel(mut self, mode: HwAccelMode) -> Self {
        self.config.hw_accel = mode;
        self
    }

    pub fn hardware_encoder(mut self, encoder: impl Into<String>) -> Self {
        self.config.hardware_encoder = encoder.into();
        self
    }

    pub fn hardware_preset(mut self, preset: impl Into<String>) -> Self {
        self.config.hardware_preset = preset.into();
        self
    }

    pub fn hardware_rate_control(mut self, rc: impl Into<String>) -> Self {
        self.config.hardware_rate_control = rc.into();
        self
    }

    /// Sets the constant quality value for the hardware encoder (0-51).
    pub fn hardware_cq(mut self, cq: u8) -> Self {
        self.config.hardware_cq = cq;
        self
    }

    pub fn software_encoder(mut self, encoder: impl Into<String>) -> Self {
        self.config.software_encoder = encoder.into();
        self
    }

    pub fn software_preset(mut self, preset: impl Into<String>) -> Self {
        self.config.software_preset = preset.into();
        self
    }

    /// Sets the CRF for the software encoder (0-51, lower is higher quality).
    pub fn software_crf(mut self, crf: u8) -> Self {
        self.config.software_crf = crf;
        self
    }

    pub fn audio_codec(mut self, codec: impl Into<String>) -> Self {
        self.config.audio_codec = codec.into();
        self
    }

    pub fn audio_bitrate(mut self, bitrate: impl Into<String>) -> Self {
        self.config.audio_bitrate = bitrate.into();
        self
    }

    /// Builds the CoreConfig. Call [`CoreConfig::validate`] before use.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_defaults_for_untouched_fields() {
        let config = CoreConfigBuilder::new().software_preset("medium").build();
        assert_eq!(config.software_preset, "medium");
        assert_eq!(config.software_crf, super::super::DEFAULT_SOFTWARE_CRF);
        assert_eq!(config.hardware_encoder, super::super::DEFAULT_HARDWARE_ENCODER);
        assert!(config.ffmpeg_path.is_none());
    }

    #[test]
    fn builder_sets_tool_paths() {
        let config = CoreConfigBuilder::new()
            .ffmpeg_path(PathBuf::from("/usr/local/bin/ffmpeg"))
            .ffprobe_path(PathBuf::from("/usr/local/bin/ffprobe"))
            .build();
        assert_eq!(config.ffmpeg_path, Some(PathBuf::from("/usr/local/bin/ffmpeg")));
        assert_eq!(config.ffprobe_path, Some(PathBuf::from("/usr/local/bin/ffprobe")));
    }
}
