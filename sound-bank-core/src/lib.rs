//! Core types for sound-bank: name sanitization, identifiers, codes and
//! per-bank configuration. Nothing in this crate touches the filesystem.

pub mod bank;
pub mod error;
pub mod identifier;
pub mod sanitize;

pub use bank::{BankConfig, CodeStyle, MUSIC_CATEGORY, NamingMode, OptionParseError, OutputFormat};
pub use error::BankError;
pub use identifier::{AssetName, Category, Code, Identifier, InvalidName};
pub use sanitize::InvalidNameReason;
