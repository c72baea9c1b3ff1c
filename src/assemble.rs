//! Final document assembly — preamble, rendered sections, output file.

use crate::error::{DocError, Result};
use std::fs;
use std::path::Path;

/// Read the static preamble, trimmed of surrounding whitespace.
pub fn read_preamble(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|source| DocError::Io {
            context: format!("failed to read preamble {}", path.display()),
            source,
        })
}

/// Concatenate the preamble and rendered sections.
///
/// Blocks are separated by a blank line and the document ends with a single
/// trailing newline. Pure — identical inputs produce byte-identical output.
pub fn assemble(preamble: &str, sections: &[String]) -> String {
    format!("{}\n\n{}\n", preamble, sections.join("\n\n"))
}

/// Write the document to `path`, fully overwriting any prior content.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| DocError::Io {
            context: format!("failed to create output directory {}", parent.display()),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| DocError::Io {
        context: format!("failed to write {}", path.display()),
        source,
    })
}
