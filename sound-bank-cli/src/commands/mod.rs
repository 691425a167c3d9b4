pub(crate) mod build;
pub(crate) mod config;
pub(crate) mod generate;
pub(crate) mod plan;

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use sound_bank_lib::{
    BankConfig, BankJob, BankPlan, FsSource, PlanIssue, PlanProgress, TranscodeProgress,
    execute_transcodes, plan_bank, render_table, transcoder_for, write_table,
};

use crate::error::CliError;

/// Spinner shown while planning or transcoding (hidden in quiet mode).
fn spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb
}

/// Plan a bank from the filesystem, with a spinner.
pub(crate) fn plan_with_progress(
    root: &Path,
    config: &BankConfig,
    quiet: bool,
) -> Result<BankPlan, CliError> {
    let pb = spinner(quiet);
    let progress = |p: PlanProgress| match p {
        PlanProgress::ScanningCategory { name, file_count } => {
            pb.set_message(format!("Scanning {name} ({file_count} files)"));
            pb.tick();
        }
        PlanProgress::Assigned { identifier, code } => {
            pb.set_message(format!("{identifier} = {code}"));
            pb.tick();
        }
        PlanProgress::Done => pb.finish_and_clear(),
    };
    let result = plan_bank(&FsSource, root, config, &progress);
    pb.finish_and_clear();
    Ok(result?)
}

/// Print the entries of a plan, one line per sound.
pub(crate) fn print_plan(plan: &BankPlan) {
    for entry in &plan.entries {
        log::info!(
            "  {} {} {} {}",
            format!("{:>5}", entry.code).if_supports_color(Stdout, |t| t.cyan()),
            entry.identifier,
            "\u{2192}".if_supports_color(Stdout, |t| t.dimmed()),
            entry
                .destination
                .display()
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    for skipped in &plan.skipped {
        log::info!(
            "  {}",
            format!(
                "Skipped \"{}\" ({} files)",
                skipped.category, skipped.file_count
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

/// Print plan issues as warnings. Returns how many there were.
pub(crate) fn report_issues(plan: &BankPlan) -> usize {
    for issue in &plan.issues {
        let label = match issue {
            PlanIssue::NamingCollision { .. } => "collision",
            PlanIssue::InvalidName { .. } => "rejected",
        };
        log::warn!(
            "  {} {}: {}",
            "\u{26A0}".if_supports_color(Stderr, |t| t.yellow()),
            label,
            issue,
        );
    }
    plan.issues.len()
}

/// One-line totals for a plan.
pub(crate) fn print_totals(plan: &BankPlan) {
    let range = match plan.sequence_range() {
        Some((first, last)) => format!("sequence {first}..={last}"),
        None => "no sequence numbers used".to_string(),
    };
    log::info!(
        "  {} {} sounds in bank {} ({})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        plan.entries.len(),
        plan.config.bank_number,
        range,
    );
}

/// Plan, write the header, and optionally transcode one bank.
///
/// Returns the number of per-item problems (plan issues plus transcode
/// failures). Structural errors are returned as `Err` before anything is
/// written.
pub(crate) fn run_bank_job(
    job: &BankJob,
    ffmpeg: &Path,
    strict: bool,
    quiet: bool,
) -> Result<usize, CliError> {
    log::info!(
        "{} {}",
        format!("Bank {}", job.bank.bank_number).if_supports_color(Stdout, |t| t.bold()),
        format!("({})", job.root.display()).if_supports_color(Stdout, |t| t.dimmed()),
    );

    let plan = plan_with_progress(&job.root, &job.bank, quiet)?;
    print_plan(&plan);
    let mut problems = report_issues(&plan);
    if strict {
        plan.check_strict()?;
    }

    let text = render_table(&plan.entries, &job.bank.enum_name, job.bank.code_style);
    write_table(&job.header, &text)?;
    log::info!(
        "  {} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        job.header.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    if job.transcode {
        let transcoder = transcoder_for(&job.bank.output_format, ffmpeg);
        let pb = spinner(quiet);
        let progress = |p: TranscodeProgress| match p {
            TranscodeProgress::Item {
                file_name,
                index,
                total,
            } => {
                pb.set_message(format!("[{}/{}] {}", index + 1, total, file_name));
                pb.tick();
            }
            TranscodeProgress::Done => pb.finish_and_clear(),
        };
        let result = execute_transcodes(&plan, transcoder.as_ref(), &progress);
        pb.finish_and_clear();
        let summary = result?;

        log::info!(
            "  {} {} files via {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.transcoded,
            transcoder.name(),
        );
        for failure in &summary.failures {
            log::warn!(
                "  {} {} \u{2192} {}: {}",
                "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                failure.source.display(),
                failure.destination.display(),
                failure.message,
            );
        }
        problems += summary.failures.len();
    }

    print_totals(&plan);
    Ok(problems)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use sound_bank_lib::{BankError, OutputFormat};
    use tempfile::TempDir;

    use super::*;

    fn colliding_job(tmp: &TempDir) -> BankJob {
        let root = tmp.path().join("src");
        let hits = root.join("Hits");
        fs::create_dir_all(&hits).unwrap();
        fs::write(hits.join("Hit 1.mp3"), b"a").unwrap();
        fs::write(hits.join("Hit-1.mp3"), b"b").unwrap();
        fs::write(hits.join("Hit 2.mp3"), b"c").unwrap();
        BankJob {
            root,
            header: tmp.path().join("include").join("sounds.h"),
            transcode: false,
            bank: BankConfig {
                destination_prefix: Some(tmp.path().join("card")),
                output_format: OutputFormat::Copy,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_strict_job_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let job = colliding_job(&tmp);
        let err = run_bank_job(&job, Path::new("ffmpeg"), true, true).unwrap_err();
        assert!(matches!(
            err,
            CliError::Bank(BankError::StrictIssues { count: 1, .. })
        ));
        assert!(!job.header.exists());
    }

    #[test]
    fn test_lenient_job_writes_header_and_counts_issues() {
        let tmp = TempDir::new().unwrap();
        let job = colliding_job(&tmp);
        let problems = run_bank_job(&job, Path::new("ffmpeg"), false, true).unwrap();
        assert_eq!(problems, 1);
        let header = fs::read_to_string(&job.header).unwrap();
        assert!(header.contains("hits__hit_1 = 257,"));
        assert!(header.contains("hits__hit_2 = 258\n"));
    }

    #[test]
    fn test_transcode_failures_count_as_problems() {
        let tmp = TempDir::new().unwrap();
        let mut job = colliding_job(&tmp);
        job.transcode = true;
        // A directory where the first card file should go
        fs::create_dir_all(tmp.path().join("card").join("001.mp3")).unwrap();

        let problems = run_bank_job(&job, Path::new("ffmpeg"), false, true).unwrap();
        assert_eq!(problems, 2);
        assert!(job.header.exists());
        assert_eq!(fs::read(tmp.path().join("card").join("002.mp3")).unwrap(), b"c");
    }
}
