//! sound-bank library: enumerate a folder of categorized sounds, assign
//! stable 16-bit codes, emit a C++ enum header, and optionally transcode the
//! files into a numbered card layout.
//!
//! The CLI is a thin wrapper around [`plan::plan_bank`],
//! [`table::render_table`] and [`transcode::execute_transcodes`].

pub mod plan;
pub mod scanner;
pub mod settings;
pub mod table;
pub mod transcode;

// Re-export core types so frontends only depend on this crate.
pub use sound_bank_core::{
    AssetName, BankConfig, BankError, Category, Code, CodeStyle, Identifier, InvalidNameReason,
    MUSIC_CATEGORY, NamingMode, OptionParseError, OutputFormat,
};

pub use plan::{BankEntry, BankPlan, PlanIssue, PlanProgress, SkippedCategory, plan_bank};
pub use scanner::{AssetSource, FsSource, MemorySource};
pub use settings::{BankJob, ProjectConfig, default_project_path, load_project};
pub use table::{render_table, write_table};
pub use transcode::{
    CopyTranscoder, FfmpegTranscoder, TranscodeError, TranscodeFailure, TranscodeProgress,
    TranscodeSummary, Transcoder, execute_transcodes, transcoder_for,
};
