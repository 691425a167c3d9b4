//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use sound_bank_lib::{BankConfig, CodeStyle, NamingMode, OutputFormat};

#[derive(Parser)]
#[command(name = "sound-bank")]
#[command(
    about = "Number a folder of categorized sounds and generate a C++ enum header",
    long_about = None
)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Code layout and destination options for a single bank.
#[derive(Args, Clone, Debug)]
pub(crate) struct BankArgs {
    /// Bank number, stored in the high byte of every code
    #[arg(short, long, default_value_t = 1)]
    pub bank: u8,

    /// First sequence number handed out (low byte of the code)
    #[arg(long, default_value_t = 1)]
    pub base: u8,

    /// Destination directory for transcoded files (default: sounds/<bank>)
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Destination file naming: zero-padded or sequence-name
    #[arg(long, default_value_t = NamingMode::ZeroPadded)]
    pub naming: NamingMode,

    /// Output format for the transcode step
    #[arg(long, default_value = "wav", value_parser = ["wav", "mp3", "copy"])]
    pub format: String,

    /// WAV sample rate in Hz
    #[arg(long, default_value_t = 44_100)]
    pub sample_rate: u32,

    /// WAV channel count
    #[arg(long, default_value_t = 1)]
    pub channels: u8,

    /// MP3 bitrate (ffmpeg syntax)
    #[arg(long, default_value = "128k")]
    pub bitrate: String,

    /// Source file extensions to enumerate
    #[arg(long = "ext", value_delimiter = ',', default_value = "mp3")]
    pub extensions: Vec<String>,

    /// Extra sanitized category names to skip (music is always skipped)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Name of the generated enum class
    #[arg(long, default_value = "ArcadeSounds")]
    pub enum_name: String,

    /// How codes are written: decimal or shifted
    #[arg(long, default_value_t = CodeStyle::Decimal)]
    pub code_style: CodeStyle,
}

impl BankArgs {
    pub(crate) fn to_config(&self) -> BankConfig {
        let output_format = match self.format.as_str() {
            "mp3" => OutputFormat::Mp3 {
                bitrate: self.bitrate.clone(),
            },
            "copy" => OutputFormat::Copy,
            _ => OutputFormat::Wav {
                sample_rate: self.sample_rate,
                channels: self.channels,
            },
        };
        BankConfig {
            bank_number: self.bank,
            base_sequence_number: self.base,
            destination_prefix: self.dest.clone(),
            naming: self.naming,
            output_format,
            source_extensions: self
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
            excluded_categories: self.exclude.clone(),
            enum_name: self.enum_name.clone(),
            code_style: self.code_style,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the codes and destinations a bank would get, without writing anything
    Plan {
        /// Directory containing the category folders
        root: PathBuf,

        #[command(flatten)]
        bank: BankArgs,
    },

    /// Write the enum header for one bank, optionally transcoding its files
    Generate {
        /// Directory containing the category folders
        root: PathBuf,

        /// Header file to write
        #[arg(long, default_value = "arcade_sounds.h")]
        header: PathBuf,

        #[command(flatten)]
        bank: BankArgs,

        /// Also transcode (or copy) every file to its destination
        #[arg(long)]
        transcode: bool,

        /// ffmpeg executable
        #[arg(long, default_value = "ffmpeg")]
        ffmpeg: PathBuf,

        /// Abort without writing if any file is rejected or collides
        #[arg(long)]
        strict: bool,
    },

    /// Build every bank listed in a project file
    Build {
        /// Project file (default: ~/.config/sound-bank/banks.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip the transcode step even for banks that enable it
        #[arg(long)]
        no_transcode: bool,

        /// Abort a bank without writing if any file is rejected or collides
        #[arg(long)]
        strict: bool,
    },

    /// Inspect the project file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the default project file path
    Path,

    /// Show the banks defined in a project file
    Show {
        /// Project file (default: ~/.config/sound-bank/banks.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
