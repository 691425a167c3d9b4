//! Sanitized identifiers and the 16-bit codes assigned to them.

use crate::sanitize::{
    InvalidNameReason, check_category_fragment, check_fragment, sanitize_asset_name,
    sanitize_category,
};

/// A name that could not be turned into an identifier fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidName {
    /// What sanitization produced before validation failed.
    pub sanitized: String,
    pub reason: InvalidNameReason,
}

/// Sanitized category, derived from a source subdirectory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    /// Sanitize and validate a raw directory name.
    pub fn from_raw(raw: &str) -> Result<Self, InvalidName> {
        let sanitized = sanitize_category(raw);
        match check_category_fragment(&sanitized) {
            Ok(()) => Ok(Self(sanitized)),
            Err(reason) => Err(InvalidName { sanitized, reason }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitized asset name, derived from a source file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetName(String);

impl AssetName {
    /// Sanitize and validate a raw file name, stripping a matching extension.
    pub fn from_file_name(file_name: &str, extensions: &[String]) -> Result<Self, InvalidName> {
        let sanitized = sanitize_asset_name(file_name, extensions);
        match check_fragment(&sanitized) {
            Ok(()) => Ok(Self(sanitized)),
            Err(reason) => Err(InvalidName { sanitized, reason }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The `(category, name)` pair, rendered as `category__name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    pub category: Category,
    pub name: AssetName,
}

impl Identifier {
    pub fn new(category: Category, name: AssetName) -> Self {
        Self { category, name }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}__{}", self.category, self.name)
    }
}

/// A 16-bit sound code: bank number in the high byte, sequence number in the low byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(u16);

impl Code {
    pub fn new(bank: u8, sequence: u8) -> Self {
        Self(((bank as u16) << 8) | sequence as u16)
    }

    pub fn bank(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn sequence(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
