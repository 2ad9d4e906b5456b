//! Comparable stream descriptions.
//!
//! A [`StreamSignature`] keeps only the ffprobe fields that decide whether
//! two files can be joined by stream copy. Anything else ffprobe reports is
//! dropped during projection so it cannot cause spurious mismatches.

use serde::{Deserialize, Serialize};

/// Fields requested from ffprobe with `-show_entries stream=...`.
pub const PROBE_STREAM_ENTRIES: &str = "index,codec_name,codec_type,profile,pix_fmt,width,height,field_order,avg_frame_rate,time_base,channels,channel_layout,sample_rate";

/// One stream as reported by `ffprobe -of json`.
///
/// Only the requested entries are modelled; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbedStream {
    pub index: Option<i64>,
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,
    pub profile: Option<String>,
    pub pix_fmt: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub field_order: Option<String>,
    pub avg_frame_rate: Option<String>,
    pub time_base: Option<String>,
    pub channels: Option<i64>,
    pub channel_layout: Option<String>,
    pub sample_rate: Option<String>,
}

/// Top-level ffprobe JSON document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub streams: Vec<ProbedStream>,
}

/// Comparison fields of the primary video stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoSignature {
    pub codec_name: Option<String>,
    pub profile: Option<String>,
    pub pix_fmt: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub field_order: Option<String>,
    pub avg_frame_rate: Option<String>,
    pub time_base: Option<String>,
}

/// Comparison fields of the primary audio stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioSignature {
    pub codec_name: Option<String>,
    pub channels: Option<i64>,
    pub channel_layout: Option<String>,
    pub sample_rate: Option<String>,
    pub time_base: Option<String>,
}

/// Normalized per-file description used for the compatibility check.
///
/// Two signatures are equal iff every field matches, including both streams
/// being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamSignature {
    pub video: Option<VideoSignature>,
    pub audio: Option<AudioSignature>,
}

impl From<&ProbedStream> for VideoSignature {
    fn from(s: &ProbedStream) -> Self {
        Self {
            codec_name: s.codec_name.clone(),
            profile: s.profile.clone(),
            pix_fmt: s.pix_fmt.clone(),
            width: s.width,
            height: s.height,
            field_order: s.field_order.clone(),
            avg_frame_rate: s.avg_frame_rate.clone(),
            time_base: s.time_base.clone(),
        }
    }
}

impl From<&ProbedStream> for AudioSignature {
    fn from(s: &ProbedStream) -> Self {
        Self {
            codec_name: s.codec_name.clone(),
            channels: s.channels,
            channel_layout: s.channel_layout.clone(),
            sample_rate: s.sample_rate.clone(),
            time_base: s.time_base.clone(),
        }
    }
}

impl StreamSignature {
    /// Projects the first video and first audio stream of `streams`.
    pub fn from_streams(streams: &[ProbedStream]) -> Self {
        let first_of = |kind: &str| {
            streams
                .iter()
                .find(|s| s.codec_type.as_deref() == Some(kind))
        };

        Self {
            video: first_of("video").map(VideoSignature::from),
            audio: first_of("audio").map(AudioSignature::from),
        }
    }

    /// Parses raw `ffprobe -of json` output. Empty output means no streams.
    pub fn from_probe_json(stdout: &[u8]) -> Result<Self, serde_json::Error> {
        if stdout.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let output: ProbeOutput = serde_json::from_slice(stdout)?;
        Ok(Self::from_streams(&output.streams))
    }

    /// One-line summary for terminal output.
    pub fn describe(&self) -> String {
        let na = |v: &Option<String>| v.clone().unwrap_or_else(|| "?".to_string());
        let video = match &self.video {
            Some(v) => format!(
                "video {} {} {}x{} {} fps {} tb {}",
                na(&v.codec_name),
                na(&v.profile),
                v.width.map_or("?".to_string(), |w| w.to_string()),
                v.height.map_or("?".to_string(), |h| h.to_string()),
                na(&v.pix_fmt),
                na(&v.avg_frame_rate),
                na(&v.time_base),
            ),
            None => "no video".to_string(),
        };
        let audio = match &self.audio {
            Some(a) => format!(
                "audio {} {} ch {} {} Hz",
                na(&a.codec_name),
                a.channels.map_or("?".to_string(), |c| c.to_string()),
                na(&a.channel_layout),
                na(&a.sample_rate),
            ),
            None => "no audio".to_string(),
        };
        format!("{video}; {audio}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "programs": [],
        "streams": [
            {
                "index": 0,
                "codec_name": "h264",
                "profile": "High",
                "codec_type": "video",
                "width": 1920,
                "height": 1080,
                "pix_fmt": "yuv420p",
                "field_order": "progressive",
                "avg_frame_rate": "30/1",
                "time_base": "1/15360",
                "disposition": { "default": 1 }
            },
            {
                "index": 1,
                "codec_name": "aac",
                "profile": "LC",
                "codec_type": "audio",
                "sample_rate": "48000",
                "channels": 2,
                "channel_layout": "stereo",
                "time_base": "1/48000"
            },
            {
                "index": 2,
                "codec_name": "aac",
                "codec_type": "audio",
                "sample_rate": "44100",
                "channels": 1,
                "time_base": "1/44100"
            }
        ]
    }"#;

    #[test]
    fn picks_first_video_and_audio_stream() {
        let sig = StreamSignature::from_probe_json(SAMPLE.as_bytes()).unwrap();
        let video = sig.video.expect("video stream");
        assert_eq!(video.codec_name.as_deref(), Some("h264"));
        assert_eq!(video.width, Some(1920));
        assert_eq!(video.avg_frame_rate.as_deref(), Some("30/1"));

        let audio = sig.audio.expect("audio stream");
        assert_eq!(audio.sample_rate.as_deref(), Some("48000"));
        assert_eq!(audio.channel_layout.as_deref(), Some("stereo"));
    }

    #[test]
    fn audio_profile_is_not_part_of_the_signature() {
        let with_profile = StreamSignature::from_probe_json(SAMPLE.as_bytes()).unwrap();
        let without = SAMPLE.replace(r#""profile": "LC","#, "");
        let without_profile = StreamSignature::from_probe_json(without.as_bytes()).unwrap();
        assert_eq!(with_profile, without_profile);
    }

    #[test]
    fn missing_streams_are_none() {
        let sig = StreamSignature::from_probe_json(br#"{"streams": []}"#).unwrap();
        assert_eq!(sig, StreamSignature::default());
        let sig = StreamSignature::from_probe_json(b"  \n").unwrap();
        assert!(sig.video.is_none() && sig.audio.is_none());
        let sig = StreamSignature::from_probe_json(b"{}").unwrap();
        assert!(sig.video.is_none());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(StreamSignature::from_probe_json(b"not json").is_err());
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let a = StreamSignature::from_probe_json(SAMPLE.as_bytes()).unwrap();
        let b = StreamSignature::from_probe_json(SAMPLE.as_bytes()).unwrap();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);

        let mut c = b.clone();
        c.video.as_mut().unwrap().field_order = Some("tt".to_string());
        assert_ne!(a, c);
        assert_ne!(c, a);
    }

    #[test]
    fn describe_mentions_key_fields() {
        let sig = StreamSignature::from_probe_json(SAMPLE.as_bytes()).unwrap();
        let text = sig.describe();
        assert!(text.contains("h264"));
        assert!(text.contains("1920x1080"));
        assert!(text.contains("stereo"));
        assert_eq!(StreamSignature::default().describe(), "no video; no audio");
    }
}
