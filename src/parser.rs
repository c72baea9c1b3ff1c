//! Enum extractor — line-by-line scan of raw proto text.
//!
//! Pure text in, `EnumDoc`s out. The scanner has no opinion about the rest
//! of the protobuf grammar: anything that is not an enum declaration, a
//! leading `///` block, or a member line is skipped without comment.

use crate::model::{EnumDoc, EnumValue, SourceSpec};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

// -- Patterns -----------------------------------------------------------------

static RE_ENUM_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^enum\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

// Member: NAME = NUMBER ; with an optional trailing // comment.
// Names are SCREAMING_SNAKE per proto convention; anything else is not a member.
static RE_MEMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z0-9_]+)\s*=\s*(\d+)\s*;(?:\s*//\s*(.*))?").unwrap());

/// Leading block-comment marker, distinct from ordinary `//` comments.
const DOC_MARKER: &str = "///";

// -- Public API ---------------------------------------------------------------

/// Extract all enum declarations from `input`, in the order they appear.
///
/// Each declaration yields one [`EnumDoc`] carrying the source name, the
/// 1-based declaration line, and the repository link from `source`.
pub fn parse(input: &str, source: &SourceSpec) -> Vec<EnumDoc> {
    let lines: Vec<&str> = input.lines().collect();
    let mut enums = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(caps) = RE_ENUM_DECL.captures(line.trim()) else {
            continue;
        };
        let name = caps[1].to_string();
        let description = leading_description(&lines, idx);
        let values = scan_members(&lines, idx);

        debug!(
            "found enum {} at {}:{} ({} values)",
            name,
            source.name,
            idx + 1,
            values.len()
        );

        enums.push(EnumDoc {
            name,
            description,
            values,
            file: source.name.to_string(),
            line: idx + 1,
            repo_url: Some(source.repo_url.to_string()),
        });
    }

    enums
}

// -- Scanning -----------------------------------------------------------------

/// Collect the contiguous `///` block immediately above the declaration.
///
/// Walks upward until the first line that is not a block comment, then joins
/// the stripped lines top-to-bottom with single spaces. All contiguous lines
/// are kept, including the one adjacent to the declaration.
fn leading_description(lines: &[&str], decl: usize) -> String {
    let mut collected: Vec<&str> = Vec::new();

    for line in lines[..decl].iter().rev() {
        match line.trim().strip_prefix(DOC_MARKER) {
            Some(text) => collected.push(text.trim()),
            None => break,
        }
    }

    collected.reverse();
    collected.join(" ")
}

/// Scan member lines strictly between the declaration and the closing brace.
///
/// The line containing `}` is never scanned; with no closing brace the scan
/// runs to end-of-text. Lines that do not match the member pattern are
/// dropped silently.
fn scan_members(lines: &[&str], decl: usize) -> Vec<EnumValue> {
    let mut values = Vec::new();

    for line in &lines[decl + 1..] {
        if line.contains('}') {
            break;
        }
        let Some(caps) = RE_MEMBER.captures(line.trim()) else {
            continue;
        };
        // A literal too large for u32 is as unparsable as a missing semicolon.
        let Ok(number) = caps[2].parse::<u32>() else {
            continue;
        };
        values.push(EnumValue {
            name: caps[1].to_string(),
            number,
            description: caps
                .get(3)
                .map(|m| m.as_str().trim_end().to_string())
                .unwrap_or_default(),
        });
    }

    values
}
