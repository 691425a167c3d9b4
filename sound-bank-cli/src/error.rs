use thiserror::Error;

use sound_bank_lib::BankError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Fatal error from planning, emission or transcoding
    #[error("{0}")]
    Bank(#[from] BankError),

    /// Logger setup or other one-off failures
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
