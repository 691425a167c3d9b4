use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use sound_bank_lib::{default_project_path, load_project};

use crate::error::CliError;

/// Print the default project file path.
pub(crate) fn run_config_path() {
    println!("{}", default_project_path().display());
}

/// Show the banks a project file defines, after path resolution.
pub(crate) fn run_config_show(config: Option<PathBuf>) -> Result<(), CliError> {
    let path = config.unwrap_or_else(default_project_path);
    let exists = path.exists();
    log::info!(
        "  Project file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        (if exists { "(exists)" } else { "(not found)" }).if_supports_color(Stdout, |t| t.dimmed()),
    );
    if !exists {
        return Ok(());
    }

    let project = load_project(&path)?;
    log::info!(
        "  {} {}",
        "ffmpeg:".if_supports_color(Stdout, |t| t.cyan()),
        project.ffmpeg().display(),
    );
    for job in &project.banks {
        let bank = &job.bank;
        log::info!("");
        log::info!(
            "  {}",
            format!("Bank {}", bank.bank_number).if_supports_color(Stdout, |t| t.bold()),
        );
        let fields = [
            ("root", job.root.display().to_string()),
            ("header", job.header.display().to_string()),
            ("enum", bank.enum_name.clone()),
            ("base sequence", bank.base_sequence_number.to_string()),
            ("destination", bank.destination_prefix().display().to_string()),
            ("naming", bank.naming.to_string()),
            ("format", bank.output_format.kind().to_string()),
            ("extensions", bank.source_extensions.join(",")),
            ("code style", bank.code_style.to_string()),
            ("transcode", job.transcode.to_string()),
        ];
        for (name, value) in fields {
            log::info!(
                "    {} {}",
                format!("{name}:").if_supports_color(Stdout, |t| t.cyan()),
                value,
            );
        }
    }
    Ok(())
}
