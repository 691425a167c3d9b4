//! Enumeration and code assignment for one bank.
//!
//! [`plan_bank`] walks the category directories in sorted order, sanitizes
//! every name, and hands out sequence numbers in a single pass. The result
//! is a [`BankPlan`]: nothing has been written yet, so the CLI can print it,
//! emit a header from it, or drive the transcoder with it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sound_bank_core::{
    AssetName, BankConfig, BankError, Category, Code, Identifier, InvalidName, InvalidNameReason,
};
use sound_bank_core::sanitize::sanitize_category;

use crate::scanner::AssetSource;

/// One enumerated source file and everything assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankEntry {
    /// Original file path
    pub source: PathBuf,
    /// Low byte of the code
    pub sequence: u8,
    pub code: Code,
    pub identifier: Identifier,
    /// Where the transcode step writes this file
    pub destination: PathBuf,
}

/// A per-item problem found while planning. The affected file gets no code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanIssue {
    /// Two source files sanitize to the same identifier. The first one keeps
    /// its code; the duplicate is dropped.
    NamingCollision {
        identifier: String,
        first: PathBuf,
        duplicate: PathBuf,
    },
    /// A directory or file name cannot become an identifier fragment.
    /// For a directory, none of its files are enumerated.
    InvalidName {
        path: PathBuf,
        sanitized: String,
        reason: InvalidNameReason,
    },
}

impl PlanIssue {
    /// The path the issue should be reported against.
    pub fn path(&self) -> &Path {
        match self {
            Self::NamingCollision { duplicate, .. } => duplicate,
            Self::InvalidName { path, .. } => path,
        }
    }
}

impl std::fmt::Display for PlanIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NamingCollision {
                identifier,
                first,
                duplicate,
            } => write!(
                f,
                "{} and {} both sanitize to '{}'",
                first.display(),
                duplicate.display(),
                identifier
            ),
            Self::InvalidName {
                path,
                sanitized,
                reason,
            } => write!(f, "{}: '{}' rejected, {}", path.display(), sanitized, reason),
        }
    }
}

/// A category directory that was skipped on purpose (e.g. `music`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCategory {
    pub path: PathBuf,
    pub category: String,
    pub file_count: usize,
}

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum PlanProgress {
    /// Starting a category directory
    ScanningCategory { name: String, file_count: usize },
    /// A file received its code
    Assigned { identifier: String, code: Code },
    /// Finished the whole tree
    Done,
}

/// Result of planning one bank.
#[derive(Debug, Clone)]
pub struct BankPlan {
    pub root: PathBuf,
    pub config: BankConfig,
    /// Enumerated files in sequence order
    pub entries: Vec<BankEntry>,
    pub issues: Vec<PlanIssue>,
    pub skipped: Vec<SkippedCategory>,
}

impl BankPlan {
    /// Sequence numbers handed out, as an inclusive range.
    pub fn sequence_range(&self) -> Option<(u8, u8)> {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => Some((first.sequence, last.sequence)),
            _ => None,
        }
    }

    /// Refuse a plan that has any per-item issue (`--strict`).
    pub fn check_strict(&self) -> Result<(), BankError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(BankError::StrictIssues {
                bank: self.config.bank_number,
                count: self.issues.len(),
            })
        }
    }

    pub fn collisions(&self) -> impl Iterator<Item = &PlanIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i, PlanIssue::NamingCollision { .. }))
    }
}

/// Plan codes and destinations for every file under `root`.
///
/// Fails only on structural problems (missing or unreadable directories, or
/// running out of sequence numbers); per-file problems land in
/// [`BankPlan::issues`].
pub fn plan_bank(
    source: &dyn AssetSource,
    root: &Path,
    config: &BankConfig,
    progress: &dyn Fn(PlanProgress),
) -> Result<BankPlan, BankError> {
    let mut category_dirs = source.category_dirs(root)?;
    category_dirs.sort();

    let mut plan = BankPlan {
        root: root.to_path_buf(),
        config: config.clone(),
        entries: Vec::new(),
        issues: Vec::new(),
        skipped: Vec::new(),
    };
    // Keyed on the rendered `category__name`; fragments may contain `__`.
    let mut assigned: HashMap<String, PathBuf> = HashMap::new();
    let mut next_sequence = config.base_sequence_number as u32;

    for dir in &category_dirs {
        let mut files: Vec<PathBuf> = source
            .files(dir)?
            .into_iter()
            .filter(|f| config.matches_extension(f))
            .collect();
        files.sort();

        let raw_category = base_name(dir);
        progress(PlanProgress::ScanningCategory {
            name: raw_category.clone(),
            file_count: files.len(),
        });

        let sanitized = sanitize_category(&raw_category);
        if config.is_excluded(&sanitized) {
            log::debug!(
                "Skipping category '{}' ({} files)",
                raw_category,
                files.len()
            );
            plan.skipped.push(SkippedCategory {
                path: dir.clone(),
                category: sanitized,
                file_count: files.len(),
            });
            continue;
        }

        let category = match Category::from_raw(&raw_category) {
            Ok(c) => c,
            Err(InvalidName { sanitized, reason }) => {
                plan.issues.push(PlanIssue::InvalidName {
                    path: dir.clone(),
                    sanitized,
                    reason,
                });
                continue;
            }
        };

        for file in files {
            let name = match AssetName::from_file_name(&base_name(&file), &config.source_extensions)
            {
                Ok(n) => n,
                Err(InvalidName { sanitized, reason }) => {
                    plan.issues.push(PlanIssue::InvalidName {
                        path: file,
                        sanitized,
                        reason,
                    });
                    continue;
                }
            };

            let identifier = Identifier::new(category.clone(), name);
            let rendered = identifier.to_string();
            if let Some(first) = assigned.get(&rendered) {
                log::debug!(
                    "Collision on '{}': {} vs {}",
                    rendered,
                    first.display(),
                    file.display()
                );
                plan.issues.push(PlanIssue::NamingCollision {
                    identifier: rendered,
                    first: first.clone(),
                    duplicate: file,
                });
                continue;
            }

            let sequence = u8::try_from(next_sequence).map_err(|_| BankError::SequenceOverflow {
                bank: config.bank_number,
                sequence: next_sequence,
            })?;
            next_sequence += 1;

            let code = Code::new(config.bank_number, sequence);
            let destination = config.destination_for(&file, sequence, &identifier);
            progress(PlanProgress::Assigned {
                identifier: rendered.clone(),
                code,
            });

            assigned.insert(rendered, file.clone());
            plan.entries.push(BankEntry {
                source: file,
                sequence,
                code,
                identifier,
                destination,
            });
        }
    }

    progress(PlanProgress::Done);
    Ok(plan)
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/plan_tests.rs"]
mod tests;
