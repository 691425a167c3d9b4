use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use sound_bank_lib::{default_project_path, load_project};

use crate::error::CliError;

/// Build every bank in the project file, in file order.
///
/// A fatal error in one bank stops the build; per-item problems are
/// summed across banks.
pub(crate) fn run_build(
    config: Option<PathBuf>,
    no_transcode: bool,
    strict: bool,
    quiet: bool,
) -> Result<usize, CliError> {
    let path = config.unwrap_or_else(default_project_path);
    log::info!(
        "Building banks from: {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    let project = load_project(&path)?;
    let ffmpeg = project.ffmpeg();
    log::info!("");

    let mut problems = 0;
    for job in &project.banks {
        let mut job = job.clone();
        if no_transcode {
            job.transcode = false;
        }
        problems += super::run_bank_job(&job, &ffmpeg, strict, quiet)?;
        log::info!("");
    }

    if problems > 0 {
        log::warn!(
            "{}",
            format!("{problems} problem(s) across {} bank(s)", project.banks.len())
                .if_supports_color(Stderr, |t| t.yellow()),
        );
    }
    Ok(problems)
}
