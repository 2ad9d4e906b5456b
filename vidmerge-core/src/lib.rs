//! Core library for merging video files with ffmpeg and ffprobe.
//!
//! This crate locates the external tools, probes each input's primary video
//! and audio stream, decides whether the inputs can be joined by stream copy,
//! and runs either a stream-copy or a re-encode concatenation.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidmerge_core::{CoreConfig, MergeSession};
//! use std::path::{Path, PathBuf};
//!
//! let mut session = MergeSession::new(CoreConfig::default()).unwrap();
//! session.select_files(vec![
//!     PathBuf::from("clip10.mp4"),
//!     PathBuf::from("clip2.mp4"),
//! ]);
//!
//! let report = session.merge(Path::new("merged.mp4")).unwrap();
//! println!("{}", report.summary());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod hardware_encode;
pub mod ordering;
pub mod processing;
pub mod session;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder, HwAccelMode};
pub use discovery::{expand_inputs, find_video_files};
pub use error::{CoreError, CoreResult};
pub use hardware_encode::VideoEncoder;
pub use ordering::{natural_key, sort_naturally};
pub use processing::{MergeReport, MergeStrategy, StreamSignature, all_same_format, merge_videos};
pub use session::{MergeSession, SelectionReport};
pub use utils::{format_bytes, format_duration};
