use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a bank run before (or instead of) writing output.
///
/// Per-item problems (naming collisions, rejected names, failed transcodes)
/// are not errors; they are collected on the plan or summary and reported
/// at the end of the run.
#[derive(Debug, Error)]
pub enum BankError {
    /// I/O error while reading the source tree or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The root or a listed subdirectory is missing or unreadable
    #[error("Input not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The root exists but is not a directory
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// More files than fit in the low byte of a code
    #[error("Bank {bank}: sequence number {sequence} does not fit in 8 bits")]
    SequenceOverflow { bank: u8, sequence: u32 },

    /// A strict run found per-item issues while planning
    #[error("Bank {bank}: {count} issue(s) found, nothing written (--strict)")]
    StrictIssues { bank: u8, count: usize },

    /// Bad project file or run parameters
    #[error("Config error: {0}")]
    Config(String),

    /// The external transcoder could not be started at all
    #[error("Transcoder '{program}' could not be started: {source}")]
    TranscoderUnavailable {
        program: String,
        source: std::io::Error,
    },
}

impl BankError {
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
