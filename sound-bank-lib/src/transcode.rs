//! Delegated transcode/copy step.
//!
//! Planning decides which files go where; this module only carries that
//! out. Each item is independent: a failed item is recorded and the run
//! moves on. Only a transcoder that cannot be started at all aborts.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use sound_bank_core::{BankError, OutputFormat};
use thiserror::Error;

use crate::plan::BankPlan;

/// Errors from a single transcode invocation.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The program is not installed or not on PATH
    #[error("'{program}' not found")]
    ProgramNotFound {
        program: String,
        source: io::Error,
    },

    /// The program ran but reported failure
    #[error("'{program}' exited with {status}: {detail}")]
    Failed {
        program: String,
        status: String,
        detail: String,
    },

    /// I/O error reading the source or writing the destination
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Turns one source file into one destination file.
pub trait Transcoder {
    /// Short name for log output.
    fn name(&self) -> &str;

    fn transcode(&self, source: &Path, destination: &Path) -> Result<(), TranscodeError>;
}

/// Runs `ffmpeg` once per file.
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    program: PathBuf,
    codec_args: Vec<OsString>,
}

impl FfmpegTranscoder {
    /// `None` for [`OutputFormat::Copy`], which needs no encoder.
    pub fn new(program: impl Into<PathBuf>, format: &OutputFormat) -> Option<Self> {
        let codec_args: Vec<OsString> = match format {
            OutputFormat::Wav {
                sample_rate,
                channels,
            } => vec![
                "-acodec".into(),
                "pcm_s16le".into(),
                "-ac".into(),
                channels.to_string().into(),
                "-ar".into(),
                sample_rate.to_string().into(),
            ],
            OutputFormat::Mp3 { bitrate } => vec![
                "-codec:a".into(),
                "libmp3lame".into(),
                "-b:a".into(),
                bitrate.into(),
            ],
            OutputFormat::Copy => return None,
        };
        Some(Self {
            program: program.into(),
            codec_args,
        })
    }

    /// Full argument list for one file (without the program name).
    pub fn args(&self, source: &Path, destination: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-y".into(), "-i".into(), source.into()];
        args.extend(self.codec_args.iter().cloned());
        args.push(destination.into());
        args
    }
}

impl Transcoder for FfmpegTranscoder {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    fn transcode(&self, source: &Path, destination: &Path) -> Result<(), TranscodeError> {
        let program = self.program.display().to_string();
        let args = self.args(source, destination);
        log::debug!(
            "{} {}",
            program,
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let output = match Command::new(&self.program).args(&args).output() {
            Ok(o) => o,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(TranscodeError::ProgramNotFound { program, source: e });
            }
            Err(e) => return Err(TranscodeError::Io(e)),
        };

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr
                .lines()
                .rev()
                .find(|l| !l.trim().is_empty())
                .unwrap_or("no output")
                .trim()
                .to_string();
            Err(TranscodeError::Failed {
                program,
                status: output.status.to_string(),
                detail,
            })
        }
    }
}

/// Copies files verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyTranscoder;

impl Transcoder for CopyTranscoder {
    fn name(&self) -> &str {
        "copy"
    }

    fn transcode(&self, source: &Path, destination: &Path) -> Result<(), TranscodeError> {
        std::fs::copy(source, destination)?;
        Ok(())
    }
}

/// Pick the transcoder for an output format. `Copy` never needs ffmpeg.
pub fn transcoder_for(format: &OutputFormat, ffmpeg: &Path) -> Box<dyn Transcoder> {
    match FfmpegTranscoder::new(ffmpeg, format) {
        Some(t) => Box::new(t),
        None => Box::new(CopyTranscoder),
    }
}

/// One item that did not make it to its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeFailure {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub message: String,
}

/// Summary of a transcode run.
#[derive(Debug, Clone, Default)]
pub struct TranscodeSummary {
    pub transcoded: usize,
    pub failures: Vec<TranscodeFailure>,
}

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum TranscodeProgress {
    /// Working on one file
    Item {
        file_name: String,
        index: usize,
        total: usize,
    },
    /// All items attempted
    Done,
}

/// Transcode every planned entry, in plan order.
pub fn execute_transcodes(
    plan: &BankPlan,
    transcoder: &dyn Transcoder,
    progress: &dyn Fn(TranscodeProgress),
) -> Result<TranscodeSummary, BankError> {
    let parents: BTreeSet<&Path> = plan
        .entries
        .iter()
        .filter_map(|e| e.destination.parent())
        .filter(|p| !p.as_os_str().is_empty())
        .collect();
    for dir in parents {
        std::fs::create_dir_all(dir)?;
    }

    let mut summary = TranscodeSummary::default();
    let total = plan.entries.len();
    for (index, entry) in plan.entries.iter().enumerate() {
        progress(TranscodeProgress::Item {
            file_name: entry
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            index,
            total,
        });

        match transcoder.transcode(&entry.source, &entry.destination) {
            Ok(()) => summary.transcoded += 1,
            Err(TranscodeError::ProgramNotFound { program, source }) => {
                progress(TranscodeProgress::Done);
                return Err(BankError::TranscoderUnavailable { program, source });
            }
            Err(e) => {
                log::debug!("{} failed for {}: {}", transcoder.name(), entry.source.display(), e);
                summary.failures.push(TranscodeFailure {
                    source: entry.source.clone(),
                    destination: entry.destination.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    progress(TranscodeProgress::Done);
    Ok(summary)
}
