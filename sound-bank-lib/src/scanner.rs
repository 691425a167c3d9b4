//! Directory listing for sound banks.
//!
//! The planner only sees the tree through [`AssetSource`], so it can be
//! driven by the real filesystem or by an in-memory listing in tests.
//! Implementations do not need to sort; the planner does.

use std::io;
use std::path::{Path, PathBuf};

use sound_bank_core::BankError;

/// A two-level listing: root, then category directories, then files.
pub trait AssetSource {
    /// Immediate subdirectories of `root`.
    fn category_dirs(&self, root: &Path) -> Result<Vec<PathBuf>, BankError>;

    /// Regular files directly inside a category directory.
    fn files(&self, dir: &Path) -> Result<Vec<PathBuf>, BankError>;
}

/// Lists the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl AssetSource for FsSource {
    fn category_dirs(&self, root: &Path) -> Result<Vec<PathBuf>, BankError> {
        if root.exists() && !root.is_dir() {
            return Err(BankError::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        let mut dirs = Vec::new();
        for entry in read_dir(root)? {
            let path = entry.map_err(|e| map_io(root, e))?.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        Ok(dirs)
    }

    fn files(&self, dir: &Path) -> Result<Vec<PathBuf>, BankError> {
        let mut files = Vec::new();
        for entry in read_dir(dir)? {
            let path = entry.map_err(|e| map_io(dir, e))?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }
}

fn read_dir(path: &Path) -> Result<std::fs::ReadDir, BankError> {
    std::fs::read_dir(path).map_err(|e| map_io(path, e))
}

/// Missing and unreadable inputs are both reported as `InputNotFound`.
fn map_io(path: &Path, e: io::Error) -> BankError {
    match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            BankError::input_not_found(path)
        }
        _ => BankError::Io(e),
    }
}

/// An in-memory tree, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    root: PathBuf,
    dirs: Vec<(PathBuf, Vec<PathBuf>)>,
}

impl MemorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dirs: Vec::new(),
        }
    }

    /// Add an (initially empty) category directory.
    pub fn with_dir(mut self, category: &str) -> Self {
        self.dir_entry(category);
        self
    }

    /// Add a file at `category/file_name` under the root.
    pub fn with_file(mut self, category: &str, file_name: &str) -> Self {
        let dir = self.root.join(category);
        self.dir_entry(category).push(dir.join(file_name));
        self
    }

    fn dir_entry(&mut self, category: &str) -> &mut Vec<PathBuf> {
        let dir = self.root.join(category);
        let index = match self.dirs.iter().position(|(d, _)| *d == dir) {
            Some(i) => i,
            None => {
                self.dirs.push((dir, Vec::new()));
                self.dirs.len() - 1
            }
        };
        &mut self.dirs[index].1
    }
}

impl AssetSource for MemorySource {
    fn category_dirs(&self, root: &Path) -> Result<Vec<PathBuf>, BankError> {
        if root != self.root.as_path() {
            return Err(BankError::input_not_found(root));
        }
        Ok(self.dirs.iter().map(|(d, _)| d.clone()).collect())
    }

    fn files(&self, dir: &Path) -> Result<Vec<PathBuf>, BankError> {
        self.dirs
            .iter()
            .find(|(d, _)| d == dir)
            .map(|(_, files)| files.clone())
            .ok_or_else(|| BankError::input_not_found(dir))
    }
}
