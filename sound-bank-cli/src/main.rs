//! sound-bank CLI
//!
//! Numbers a folder of categorized sound effects, writes the matching C++
//! enum header, and optionally transcodes the files into a card layout.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(problems) => {
            log::warn!(
                "{}",
                format!("Finished with {problems} problem(s)")
                    .if_supports_color(Stderr, |t| t.yellow()),
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!(
                "{} {}",
                "error:".if_supports_color(Stderr, |t| t.red()),
                e,
            );
            ExitCode::FAILURE
        }
    }
}

/// Dispatch a command. `Ok(n)` is the number of per-item problems reported.
fn run(cli: Cli) -> Result<usize, CliError> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Plan { root, bank } => commands::plan::run_plan(&root, &bank, quiet),
        Commands::Generate {
            root,
            header,
            bank,
            transcode,
            ffmpeg,
            strict,
        } => commands::generate::run_generate(
            root, header, &bank, transcode, &ffmpeg, strict, quiet,
        ),
        Commands::Build {
            config,
            no_transcode,
            strict,
        } => commands::build::run_build(config, no_transcode, strict, quiet),
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(0)
            }
            ConfigAction::Show { config } => {
                commands::config::run_config_show(config)?;
                Ok(0)
            }
        },
    }
}
