// vidmerge-core/tests/common/mod.rs

// Test doubles for the ffmpeg spawner, the ffprobe executor and the encoder
// catalog. Shared by the integration tests in this directory.

#![allow(dead_code)]

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::os::unix::process::ExitStatusExt; // For ExitStatus::from_raw
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;
use vidmerge_core::error::{CoreResult, probe_error};
use vidmerge_core::external::{FfmpegProcess, FfmpegSpawner, FfprobeExecutor};
use vidmerge_core::hardware_encode::EncoderCatalog;
use vidmerge_core::processing::{AudioSignature, StreamSignature, VideoSignature};

// --- FFmpeg ---

/// Mock implementation of FfmpegProcess.
#[derive(Clone)]
pub struct MockFfmpegProcess {
    events_to_emit: Vec<FfmpegEvent>,
    exit_status: ExitStatus,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        for event in self.events_to_emit.clone() {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }
}

/// What the mock saw when ffmpeg was "started".
#[derive(Debug, Clone)]
pub struct ReceivedCall {
    pub args: Vec<String>,
    /// Contents of the concat list passed after `-i`, read at spawn time.
    pub list_path: Option<PathBuf>,
    pub list_contents: Option<String>,
}

/// Mock spawner that answers every spawn with the same scripted process.
#[derive(Clone)]
pub struct MockFfmpegSpawner {
    events: Vec<FfmpegEvent>,
    exit_status: ExitStatus,
    create_dummy_output: bool,
    received_calls: Rc<RefCell<Vec<ReceivedCall>>>,
}

impl MockFfmpegSpawner {
    /// ffmpeg exits 0 and the output file is created.
    pub fn succeeding() -> Self {
        Self {
            events: Vec::new(),
            exit_status: ExitStatus::from_raw(0),
            create_dummy_output: true,
            received_calls: Rc::default(),
        }
    }

    /// ffmpeg exits 0 but leaves no output file behind.
    pub fn succeeding_without_output() -> Self {
        Self {
            create_dummy_output: false,
            ..Self::succeeding()
        }
    }

    /// ffmpeg emits `events` and exits with code 1.
    pub fn failing(events: Vec<FfmpegEvent>) -> Self {
        Self {
            events,
            // Raw wait status; exit code lives in the high byte
            exit_status: ExitStatus::from_raw(1 << 8),
            create_dummy_output: false,
            received_calls: Rc::default(),
        }
    }

    pub fn get_received_calls(&self) -> Vec<ReceivedCall> {
        self.received_calls.borrow().clone()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<String> = cmd
            .as_inner()
            .get_args()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();

        let list_path = args
            .iter()
            .position(|a| a == "-i")
            .and_then(|i| args.get(i + 1))
            .map(PathBuf::from);
        let list_contents = list_path
            .as_ref()
            .and_then(|p| std::fs::read_to_string(p).ok());

        if self.create_dummy_output {
            if let Some(output) = args.last() {
                std::fs::write(output, b"merged").expect("mock could not create output");
            }
        }

        self.received_calls.borrow_mut().push(ReceivedCall {
            args,
            list_path,
            list_contents,
        });

        Ok(MockFfmpegProcess {
            events_to_emit: self.events.clone(),
            exit_status: self.exit_status,
        })
    }
}

// --- FFprobe ---

/// Mock implementation of FfprobeExecutor keyed by input path.
#[derive(Default)]
pub struct MockFfprobeExecutor {
    results: RefCell<HashMap<PathBuf, Result<StreamSignature, String>>>,
    probed: RefCell<Vec<PathBuf>>,
}

impl MockFfprobeExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn expect_signature(&self, input_path: &Path, signature: StreamSignature) {
        self.results
            .borrow_mut()
            .insert(input_path.to_path_buf(), Ok(signature));
    }

    pub fn expect_failure(&self, input_path: &Path, stderr: &str) {
        self.results
            .borrow_mut()
            .insert(input_path.to_path_buf(), Err(stderr.to_string()));
    }

    /// Paths probed so far, in call order.
    pub fn probed(&self) -> Vec<PathBuf> {
        self.probed.borrow().clone()
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn probe_signature(&self, input_path: &Path) -> CoreResult<StreamSignature> {
        self.probed.borrow_mut().push(input_path.to_path_buf());
        match self.results.borrow().get(input_path) {
            Some(Ok(signature)) => Ok(signature.clone()),
            Some(Err(stderr)) => Err(probe_error(input_path, stderr.clone())),
            None => Err(probe_error(input_path, "no expectation set")),
        }
    }
}

// --- Encoder catalog ---

/// Catalog with a fixed answer that counts how often it was asked.
pub struct FakeCatalog {
    available: bool,
    queries: Cell<usize>,
}

impl FakeCatalog {
    pub fn with_hardware() -> Self {
        Self {
            available: true,
            queries: Cell::new(0),
        }
    }

    pub fn without_hardware() -> Self {
        Self {
            available: false,
            queries: Cell::new(0),
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl EncoderCatalog for FakeCatalog {
    fn has_encoder(&self, _encoder: &str) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.available
    }
}

// --- Fixtures ---

/// 1080p30 H.264 + stereo AAC, the common phone/camera output.
pub fn h264_1080p() -> StreamSignature {
    StreamSignature {
        video: Some(VideoSignature {
            codec_name: Some("h264".into()),
            profile: Some("High".into()),
            pix_fmt: Some("yuv420p".into()),
            width: Some(1920),
            height: Some(1080),
            field_order: Some("progressive".into()),
            avg_frame_rate: Some("30/1".into()),
            time_base: Some("1/15360".into()),
        }),
        audio: Some(AudioSignature {
            codec_name: Some("aac".into()),
            channels: Some(2),
            channel_layout: Some("stereo".into()),
            sample_rate: Some("48000".into()),
            time_base: Some("1/48000".into()),
        }),
    }
}

/// Creates `names` as small files inside `dir` and returns their paths.
pub fn create_inputs(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            std::fs::write(&path, b"dummy content").expect("Failed to create dummy file");
            path
        })
        .collect()
}

/// Concat list files left behind in `dir`.
pub fn leftover_lists(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| {
                    p.file_name()
                        .is_some_and(|n| n.to_string_lossy().starts_with("vidmerge_concat_"))
                })
                .collect()
        })
        .unwrap_or_default()
}
