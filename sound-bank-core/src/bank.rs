//! Per-bank run configuration.
//!
//! A bank is one partition of the code space (the high byte of every
//! [`Code`](crate::Code)) together with where and how its files are written.
//! Nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// Category that is never enumerated, regardless of configuration.
pub const MUSIC_CATEGORY: &str = "music";

/// How destination files are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingMode {
    /// `{prefix}/032.wav`, the layout DFPlayer-style modules index by number.
    #[default]
    ZeroPadded,
    /// `{prefix}/032_beeps__a.wav`, readable when browsing the card.
    SequenceName,
}

/// What the delegated transcode step produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OutputFormat {
    /// 16-bit PCM WAV.
    Wav {
        #[serde(default = "default_sample_rate")]
        sample_rate: u32,
        #[serde(default = "default_channels")]
        channels: u8,
    },
    /// LAME-encoded MP3 at a fixed bitrate (ffmpeg syntax, e.g. `128k`).
    Mp3 {
        #[serde(default = "default_bitrate")]
        bitrate: String,
    },
    /// Verbatim copy, keeping the source extension.
    Copy,
}

fn default_sample_rate() -> u32 {
    44_100
}

fn default_channels() -> u8 {
    1
}

fn default_bitrate() -> String {
    "128k".to_string()
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Wav {
            sample_rate: default_sample_rate(),
            channels: default_channels(),
        }
    }
}

impl OutputFormat {
    /// Destination file extension, or `None` to keep the source's.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Wav { .. } => Some("wav"),
            Self::Mp3 { .. } => Some("mp3"),
            Self::Copy => None,
        }
    }

    /// Short name used on the command line.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Wav { .. } => "wav",
            Self::Mp3 { .. } => "mp3",
            Self::Copy => "copy",
        }
    }
}

/// How codes are written into the generated header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeStyle {
    /// `beeps__a = 1056`
    #[default]
    Decimal,
    /// `beeps__a = (4 << 8) | 32`
    Shifted,
}

/// Error returned when a string does not name a known option value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}' (expected one of: {expected})")]
pub struct OptionParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl std::str::FromStr for NamingMode {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero-padded" | "numeric" => Ok(Self::ZeroPadded),
            "sequence-name" | "named" => Ok(Self::SequenceName),
            _ => Err(OptionParseError {
                kind: "naming mode",
                value: s.to_string(),
                expected: "zero-padded, sequence-name",
            }),
        }
    }
}

impl std::fmt::Display for NamingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPadded => write!(f, "zero-padded"),
            Self::SequenceName => write!(f, "sequence-name"),
        }
    }
}

impl std::str::FromStr for CodeStyle {
    type Err = OptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "decimal" => Ok(Self::Decimal),
            "shifted" => Ok(Self::Shifted),
            _ => Err(OptionParseError {
                kind: "code style",
                value: s.to_string(),
                expected: "decimal, shifted",
            }),
        }
    }
}

impl std::fmt::Display for CodeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decimal => write!(f, "decimal"),
            Self::Shifted => write!(f, "shifted"),
        }
    }
}

/// Everything that determines the codes and destinations of one bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    /// High byte of every code in this bank.
    pub bank_number: u8,
    /// First sequence number handed out.
    pub base_sequence_number: u8,
    /// Destination directory; `sounds/{bank:02}` when unset.
    pub destination_prefix: Option<PathBuf>,
    pub naming: NamingMode,
    pub output_format: OutputFormat,
    /// Source file extensions to enumerate (case-insensitive, no dot).
    pub source_extensions: Vec<String>,
    /// Sanitized category names to skip in addition to `music`.
    pub excluded_categories: Vec<String>,
    /// Name of the generated `enum class`.
    pub enum_name: String,
    pub code_style: CodeStyle,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            bank_number: 1,
            base_sequence_number: 1,
            destination_prefix: None,
            naming: NamingMode::default(),
            output_format: OutputFormat::default(),
            source_extensions: vec!["mp3".to_string()],
            excluded_categories: Vec::new(),
            enum_name: "ArcadeSounds".to_string(),
            code_style: CodeStyle::default(),
        }
    }
}

impl BankConfig {
    /// Resolved destination directory.
    pub fn destination_prefix(&self) -> PathBuf {
        self.destination_prefix
            .clone()
            .unwrap_or_else(|| PathBuf::from("sounds").join(format!("{:02}", self.bank_number)))
    }

    /// Whether a sanitized category name is skipped entirely.
    pub fn is_excluded(&self, sanitized_category: &str) -> bool {
        sanitized_category == MUSIC_CATEGORY
            || self
                .excluded_categories
                .iter()
                .any(|c| c == sanitized_category)
    }

    /// Whether a path's extension is one of the configured source extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.source_extensions.iter().any(|s| s.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }

    /// Destination path for one enumerated file.
    pub fn destination_for(&self, source: &Path, sequence: u8, id: &Identifier) -> PathBuf {
        let ext = match self.output_format.extension() {
            Some(ext) => ext.to_string(),
            None => source
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let stem = match self.naming {
            NamingMode::ZeroPadded => format!("{sequence:03}"),
            NamingMode::SequenceName => format!("{sequence:03}_{id}"),
        };
        let file_name = if ext.is_empty() {
            stem
        } else {
            format!("{stem}.{ext}")
        };
        self.destination_prefix().join(file_name)
    }
}

#[cfg(test)]
#[path = "tests/bank_tests.rs"]
mod tests;
