//! Generated C++ header: one `enum class` entry per planned sound.

use std::fmt::Write as _;
use std::path::Path;

use sound_bank_core::{BankError, CodeStyle};

use crate::plan::BankEntry;

/// Render the header text for a list of entries, in order.
///
/// The output depends only on the arguments, so the same plan always
/// produces byte-identical text.
pub fn render_table(entries: &[BankEntry], enum_name: &str, style: CodeStyle) -> String {
    let mut out = String::new();
    out.push_str("#pragma once\n\n");
    let _ = writeln!(out, "enum class {enum_name} : uint16_t {{");
    for (i, entry) in entries.iter().enumerate() {
        let _ = write!(out, "  {} = ", entry.identifier);
        match style {
            CodeStyle::Decimal => {
                let _ = write!(out, "{}", entry.code);
            }
            CodeStyle::Shifted => {
                let _ = write!(out, "({} << 8) | {}", entry.code.bank(), entry.code.sequence());
            }
        }
        if i + 1 < entries.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("};\n");
    out
}

/// Write the header, fully replacing any previous file.
///
/// Writes to a sibling temp file first and renames it into place, so an
/// interrupted run never leaves a half-written header behind.
pub fn write_table(path: &Path, contents: &str) -> Result<(), BankError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = Path::new(&tmp_name);
    std::fs::write(tmp, contents)?;
    std::fs::rename(tmp, path)?;
    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
