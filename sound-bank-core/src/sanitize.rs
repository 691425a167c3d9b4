//! Name sanitization: raw filesystem names to identifier fragments.
//!
//! Characters the substitution table does not cover are left in place and
//! then rejected by [`check_fragment`], so a stray `!` or `#` never reaches a
//! generated header.

/// Substitutions shared by categories and asset names, applied in order
/// after lowercasing.
const COMMON_RULES: &[(&str, &str)] = &[
    (" ", "_"),
    ("&", "and"),
    (",", ""),
    ("'", ""),
    ("-", "_"),
];

/// Extra substitutions applied to asset (file) names only.
const NAME_RULES: &[(&str, &str)] = &[("(", ""), (")", "")];

/// Sanitize a category directory's base name.
///
/// `"Drums & Percussion"` becomes `"drums_and_percussion"`.
pub fn sanitize_category(raw: &str) -> String {
    apply_rules(raw.to_lowercase(), COMMON_RULES)
}

/// Sanitize an asset file's base name, stripping a known source extension.
///
/// `"Hit (1).mp3"` becomes `"hit_1"` when `mp3` is in `extensions`.
/// Extensions are matched case-insensitively.
pub fn sanitize_asset_name(file_name: &str, extensions: &[String]) -> String {
    let stem = strip_extension(file_name, extensions);
    let common = apply_rules(stem.to_lowercase(), COMMON_RULES);
    apply_rules(common, NAME_RULES)
}

fn apply_rules(mut s: String, rules: &[(&str, &str)]) -> String {
    for &(from, to) in rules {
        if s.contains(from) {
            s = s.replace(from, to);
        }
    }
    s
}

fn strip_extension<'a>(file_name: &'a str, extensions: &[String]) -> &'a str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) => stem,
        _ => file_name,
    }
}

/// Why a sanitized fragment cannot be used in an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidNameReason {
    /// Nothing left after sanitization.
    Empty,
    /// A character outside `[a-z0-9_]` survived sanitization.
    UnsupportedCharacter(char),
    /// Categories lead the generated identifier and cannot start with a digit.
    LeadingDigit,
}

impl std::fmt::Display for InvalidNameReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "name is empty after sanitization"),
            Self::UnsupportedCharacter(c) => {
                write!(f, "unsupported character {:?} (U+{:04X})", c, *c as u32)
            }
            Self::LeadingDigit => write!(f, "category starts with a digit"),
        }
    }
}

/// Check that a sanitized fragment only contains `[a-z0-9_]`.
pub fn check_fragment(fragment: &str) -> Result<(), InvalidNameReason> {
    if fragment.is_empty() {
        return Err(InvalidNameReason::Empty);
    }
    match fragment
        .chars()
        .find(|&c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'))
    {
        Some(c) => Err(InvalidNameReason::UnsupportedCharacter(c)),
        None => Ok(()),
    }
}

/// Like [`check_fragment`], plus the leading-digit rule for categories.
pub fn check_category_fragment(fragment: &str) -> Result<(), InvalidNameReason> {
    check_fragment(fragment)?;
    if fragment.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(InvalidNameReason::LeadingDigit);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/sanitize_tests.rs"]
mod tests;
