//! Project file: one or more banks described in TOML.
//!
//! The default location is `~/.config/sound-bank/banks.toml`. Relative paths
//! inside the file are resolved against the file's own directory, so a
//! project file can live next to the sound folders it describes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sound_bank_core::{BankConfig, BankError};

/// Canonical path to the default project file.
pub fn default_project_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("sound-bank").join("banks.toml")
}

/// Top-level project file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// ffmpeg executable; `ffmpeg` on PATH when unset.
    #[serde(default)]
    pub ffmpeg: Option<PathBuf>,
    #[serde(default)]
    pub banks: Vec<BankJob>,
}

/// One bank to build: where to read, what to write, and its code layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankJob {
    /// Directory holding the category folders.
    pub root: PathBuf,
    /// Generated header path.
    pub header: PathBuf,
    /// Run the transcode step after writing the header.
    #[serde(default)]
    pub transcode: bool,
    #[serde(flatten)]
    pub bank: BankConfig,
}

impl ProjectConfig {
    /// ffmpeg executable to use.
    pub fn ffmpeg(&self) -> PathBuf {
        self.ffmpeg.clone().unwrap_or_else(|| PathBuf::from("ffmpeg"))
    }

    /// Parse a project file from a string. Paths are left as written.
    pub fn parse(contents: &str) -> Result<Self, BankError> {
        let config: ProjectConfig =
            toml::from_str(contents).map_err(|e| BankError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject files that would make two banks overwrite each other.
    pub fn validate(&self) -> Result<(), BankError> {
        if self.banks.is_empty() {
            return Err(BankError::config("no [[banks]] defined"));
        }
        let mut numbers = HashSet::new();
        let mut headers = HashSet::new();
        for job in &self.banks {
            if !numbers.insert(job.bank.bank_number) {
                return Err(BankError::config(format!(
                    "bank number {} is used more than once",
                    job.bank.bank_number
                )));
            }
            if !headers.insert(&job.header) {
                return Err(BankError::config(format!(
                    "header {} is written by more than one bank",
                    job.header.display()
                )));
            }
            if job.bank.source_extensions.is_empty() {
                return Err(BankError::config(format!(
                    "bank {} has no source_extensions",
                    job.bank.bank_number
                )));
            }
        }
        Ok(())
    }

    /// Resolve every relative path against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        if let Some(ffmpeg) = &self.ffmpeg {
            // Bare program names are looked up on PATH, not next to the file
            if ffmpeg.components().count() > 1 {
                self.ffmpeg = Some(resolve(base, ffmpeg));
            }
        }
        for job in &mut self.banks {
            job.root = resolve(base, &job.root);
            job.header = resolve(base, &job.header);
            job.bank.destination_prefix = Some(resolve(base, &job.bank.destination_prefix()));
        }
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Load a project file, resolving relative paths against its directory.
pub fn load_project(path: &Path) -> Result<ProjectConfig, BankError> {
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => BankError::input_not_found(path),
        _ => BankError::Io(e),
    })?;
    let mut config = ProjectConfig::parse(&contents).map_err(|e| match e {
        BankError::Config(msg) => BankError::config(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    config.resolve_paths(base);
    log::debug!(
        "Loaded {} bank(s) from {}",
        config.banks.len(),
        path.display()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sound_bank_core::{NamingMode, OutputFormat};

    const TWO_BANKS: &str = r#"
ffmpeg = "/opt/ffmpeg/bin/ffmpeg"

[[banks]]
root = "tmp/retro"
header = "include/arcade_sounds.h"
transcode = true
bank_number = 4
base_sequence_number = 32
output_format = { kind = "wav", sample_rate = 44100, channels = 1 }

[[banks]]
root = "tmp/voices"
header = "include/voices.h"
bank_number = 5
naming = "sequence-name"
destination_prefix = "card/05"
enum_name = "Voices"
output_format = { kind = "mp3", bitrate = "128k" }
"#;

    #[test]
    fn test_parse_two_banks() {
        let config = ProjectConfig::parse(TWO_BANKS).unwrap();
        assert_eq!(config.banks.len(), 2);
        let retro = &config.banks[0];
        assert!(retro.transcode);
        assert_eq!(retro.bank.bank_number, 4);
        assert_eq!(retro.bank.base_sequence_number, 32);
        assert_eq!(retro.bank.naming, NamingMode::ZeroPadded);

        let voices = &config.banks[1];
        assert!(!voices.transcode);
        assert_eq!(voices.bank.enum_name, "Voices");
        assert_eq!(voices.bank.naming, NamingMode::SequenceName);
        assert_eq!(
            voices.bank.output_format,
            OutputFormat::Mp3 {
                bitrate: "128k".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_bank_numbers_rejected() {
        let text = r#"
[[banks]]
root = "a"
header = "a.h"
bank_number = 2

[[banks]]
root = "b"
header = "b.h"
bank_number = 2
"#;
        let err = ProjectConfig::parse(text).unwrap_err();
        assert!(err.to_string().contains("bank number 2"));
    }

    #[test]
    fn test_duplicate_headers_rejected() {
        let text = r#"
[[banks]]
root = "a"
header = "same.h"
bank_number = 1

[[banks]]
root = "b"
header = "same.h"
bank_number = 2
"#;
        assert!(matches!(
            ProjectConfig::parse(text),
            Err(BankError::Config(_))
        ));
    }

    #[test]
    fn test_empty_project_rejected() {
        assert!(ProjectConfig::parse("").is_err());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        assert!(matches!(
            ProjectConfig::parse("[[banks]]\nroot = 3\n"),
            Err(BankError::Config(_))
        ));
    }

    #[test]
    fn test_resolve_paths() {
        let mut config = ProjectConfig::parse(TWO_BANKS).unwrap();
        config.resolve_paths(Path::new("/proj"));
        assert_eq!(config.banks[0].root, PathBuf::from("/proj/tmp/retro"));
        assert_eq!(
            config.banks[0].header,
            PathBuf::from("/proj/include/arcade_sounds.h")
        );
        assert_eq!(
            config.banks[0].bank.destination_prefix,
            Some(PathBuf::from("/proj/sounds/04"))
        );
        assert_eq!(
            config.banks[1].bank.destination_prefix,
            Some(PathBuf::from("/proj/card/05"))
        );
        assert_eq!(config.ffmpeg(), PathBuf::from("/opt/ffmpeg/bin/ffmpeg"));
    }

    #[test]
    fn test_bare_ffmpeg_name_stays_on_path() {
        let mut config = ProjectConfig::parse(
            "ffmpeg = \"ffmpeg\"\n[[banks]]\nroot = \"r\"\nheader = \"h.h\"\n",
        )
        .unwrap();
        config.resolve_paths(Path::new("/proj"));
        assert_eq!(config.ffmpeg(), PathBuf::from("ffmpeg"));
    }

    #[test]
    fn test_load_project_from_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("banks.toml");
        std::fs::write(&path, TWO_BANKS).unwrap();
        let config = load_project(&path).unwrap();
        assert_eq!(config.banks[1].root, tmp.path().join("tmp/voices"));
    }

    #[test]
    fn test_load_project_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(matches!(
            load_project(&tmp.path().join("nope.toml")),
            Err(BankError::InputNotFound { .. })
        ));
    }
}
