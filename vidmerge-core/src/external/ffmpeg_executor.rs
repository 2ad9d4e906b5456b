// ============================================================================
// vidmerge-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Abstraction
//
// Spawning ffmpeg goes through the FfmpegSpawner trait so the merge logic can
// be exercised without a real ffmpeg. The concrete spawner wraps
// ffmpeg-sidecar.
//
// KEY COMPONENTS:
// - FfmpegProcess: Trait representing an active FFmpeg process
// - FfmpegSpawner: Trait for creating new FFmpeg processes
// - SidecarSpawner: Concrete implementation using ffmpeg-sidecar
// - run_ffmpeg: Drains events, waits, and captures diagnostic text

use crate::error::{CoreResult, command_start_error, command_wait_error};
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::process::ExitStatus;

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.0.iter().map_err(|e| {
            log::error!("Failed to get ffmpeg event iterator: {}", e);
            command_wait_error(
                "ffmpeg (sidecar - get iter)",
                std::io::Error::other(e.to_string()),
            )
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_wait_error("ffmpeg (sidecar)", e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg (sidecar)", e))
    }
}

/// Outcome of a finished ffmpeg run.
#[derive(Debug, Clone)]
pub struct FfmpegRun {
    pub status: ExitStatus,
    /// Warning, error and fatal log lines in the order ffmpeg printed them.
    pub diagnostics: Vec<String>,
}

impl FfmpegRun {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Diagnostic lines joined with newlines; empty when ffmpeg said nothing.
    pub fn diagnostic_text(&self) -> String {
        self.diagnostics.join("\n").trim().to_string()
    }
}

/// Spawns `cmd`, drains its events and waits for it to exit.
///
/// A non-zero exit is not an error here; callers decide how to report it.
pub fn run_ffmpeg<S: FfmpegSpawner>(spawner: &S, cmd: FfmpegCommand) -> CoreResult<FfmpegRun> {
    log::debug!("Running ffmpeg command: {:?}", cmd);

    let mut process = spawner.spawn(cmd)?;
    let mut diagnostics = Vec::new();

    process.handle_events(|event| {
        match event {
            FfmpegEvent::Log(LogLevel::Warning, line) => {
                log::debug!("ffmpeg warning: {line}");
                diagnostics.push(line);
            }
            FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                log::debug!("ffmpeg error: {line}");
                diagnostics.push(line);
            }
            FfmpegEvent::Error(line) => {
                log::debug!("ffmpeg error event: {line}");
                diagnostics.push(line);
            }
            FfmpegEvent::Log(_, line) => log::trace!("ffmpeg: {line}"),
            _ => {}
        }
        Ok(())
    })?;

    let status = process.wait()?;
    log::debug!("ffmpeg exited with {}", status);

    Ok(FfmpegRun {
        status,
        diagnostics,
    })
}
