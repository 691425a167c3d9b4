use std::path::{Path, PathBuf};

use sound_bank_lib::BankJob;

use crate::cli_types::BankArgs;
use crate::error::CliError;

/// Generate the header (and optionally the card layout) for one bank.
pub(crate) fn run_generate(
    root: PathBuf,
    header: PathBuf,
    args: &BankArgs,
    transcode: bool,
    ffmpeg: &Path,
    strict: bool,
    quiet: bool,
) -> Result<usize, CliError> {
    let job = BankJob {
        root,
        header,
        transcode,
        bank: args.to_config(),
    };
    let problems = super::run_bank_job(&job, ffmpeg, strict, quiet)?;
    log::info!("");
    Ok(problems)
}
