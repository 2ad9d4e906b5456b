//! Merge session: the selected files plus everything needed to merge them.
//!
//! A session is created once at startup. Creating it verifies that ffmpeg
//! and ffprobe can be invoked, so a missing tool is reported before the user
//! selects anything.

use std::path::{Path, PathBuf};

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{CommandFfprobeExecutor, FfmpegSpawner, FfprobeExecutor, SidecarSpawner, ToolPaths};
use crate::hardware_encode::{EncoderCatalog, FfmpegEncoderCatalog};
use crate::ordering::sort_naturally;
use crate::processing::{MergeReport, MergeStrategy, StreamSignature, choose_strategy, merge_videos};
use crate::utils::absolute_path;

/// Signatures of the selected files and the strategy they imply.
#[derive(Debug, Clone)]
pub struct SelectionReport {
    /// Files in merge order with their probed signatures
    pub files: Vec<(PathBuf, StreamSignature)>,
    pub strategy: MergeStrategy,
}

#[derive(Debug, Clone)]
pub struct MergeSession {
    config: CoreConfig,
    tools: ToolPaths,
    selected: Vec<PathBuf>,
}

impl MergeSession {
    /// Validates `config`, resolves the tools and checks they are invocable.
    pub fn new(config: CoreConfig) -> CoreResult<Self> {
        config.validate()?;
        let tools = ToolPaths::resolve(&config);
        tools.verify()?;
        log::debug!(
            "Using ffmpeg at {} and ffprobe at {}",
            tools.ffmpeg.display(),
            tools.ffprobe.display()
        );
        Ok(Self::with_tools(config, tools))
    }

    /// Builds a session around already resolved tools without checking them.
    pub fn with_tools(config: CoreConfig, tools: ToolPaths) -> Self {
        Self {
            config,
            tools,
            selected: Vec::new(),
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Replaces the selection with `files`, stored as absolute paths in
    /// natural order.
    pub fn select_files(&mut self, files: Vec<PathBuf>) {
        let mut files: Vec<PathBuf> = files.iter().map(|f| absolute_path(f)).collect();
        sort_naturally(&mut files);
        self.selected = files;
    }

    /// Current selection in merge order.
    pub fn selected_files(&self) -> &[PathBuf] {
        &self.selected
    }

    /// Probes every selected file and reports which strategy a merge would
    /// use. Unlike a merge, this does not stop at the first mismatch.
    pub fn inspect(&self) -> CoreResult<SelectionReport> {
        self.inspect_with(&self.prober())
    }

    /// [`MergeSession::inspect`] with a caller-supplied prober.
    pub fn inspect_with<P: FfprobeExecutor + ?Sized>(&self, probe: &P) -> CoreResult<SelectionReport> {
        self.ensure_selection()?;
        let files = self
            .selected
            .iter()
            .map(|file| Ok((file.clone(), probe.probe_signature(file)?)))
            .collect::<CoreResult<Vec<_>>>()?;
        let signatures: Vec<StreamSignature> = files.iter().map(|(_, s)| s.clone()).collect();
        Ok(SelectionReport {
            strategy: choose_strategy(&signatures),
            files,
        })
    }

    /// ffprobe executor bound to this session's ffprobe path.
    pub fn prober(&self) -> CommandFfprobeExecutor {
        CommandFfprobeExecutor::new(&self.tools.ffprobe)
    }

    /// Merges the selection into `output` using the real ffmpeg and ffprobe.
    pub fn merge(&self, output: &Path) -> CoreResult<MergeReport> {
        self.merge_with(
            &self.prober(),
            &SidecarSpawner,
            &FfmpegEncoderCatalog::new(&self.tools.ffmpeg),
            output,
        )
    }

    /// Merges the selection with caller-supplied collaborators.
    pub fn merge_with<P, S, C>(
        &self,
        probe: &P,
        spawner: &S,
        catalog: &C,
        output: &Path,
    ) -> CoreResult<MergeReport>
    where
        P: FfprobeExecutor + ?Sized,
        S: FfmpegSpawner,
        C: EncoderCatalog + ?Sized,
    {
        self.ensure_selection()?;
        merge_videos(
            probe,
            spawner,
            catalog,
            &self.tools.ffmpeg,
            &self.config,
            &self.selected,
            output,
        )
    }

    fn ensure_selection(&self) -> CoreResult<()> {
        if self.selected.is_empty() {
            Err(CoreError::NoFilesSelected)
        } else {
            Ok(())
        }
    }
}
