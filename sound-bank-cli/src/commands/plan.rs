use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::BankArgs;
use crate::error::CliError;

/// Show what a bank would look like. Writes nothing.
pub(crate) fn run_plan(root: &Path, args: &BankArgs, quiet: bool) -> Result<usize, CliError> {
    let config = args.to_config();
    log::info!(
        "Planning bank {} from: {}",
        config.bank_number,
        root.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "{}",
        "Dry run: no files will be written".if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("");

    let plan = super::plan_with_progress(root, &config, quiet)?;
    super::print_plan(&plan);
    let problems = super::report_issues(&plan);
    log::info!("");
    super::print_totals(&plan);
    Ok(problems)
}
