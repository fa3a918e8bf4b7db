//! Parsing of net group reports.
//!
//! A report holds one group per line:
//!
//! ```text
//! # Net Groups by FPGA Connection Pattern
//! Group [1]: F1 -> F2 (3),F4 (1) -> [net1, net5]
//! Group [2]: F2 -> unknown -> [net9]
//! ```
//!
//! Blank lines and `#` comments are ignored. Lines that do not look like a
//! group are dropped without any diagnostic.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::{GroupRecord, UNKNOWN_SINKS};

static GROUP_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Group\s*\[(\d+)\]:\s*(\w+)\s*->\s*(.*?)\s*->\s*\[(.*?)\]")
        .expect("Invalid group line regex")
});

static SINK_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\d+\)").expect("Invalid sink count regex"));

/// Reads and parses a net group report from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or is not UTF-8.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<GroupRecord>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading net group report");
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let records = parse_str(&content);
    tracing::debug!(records = records.len(), "Parsed net group report");
    Ok(records)
}

/// Parses every group line in `content`, in order.
///
/// # Examples
///
/// ```
/// use netmerge_core::parser::parse_str;
///
/// let records = parse_str("# header\nGroup [1]: F0 -> F1 (2) -> [n1, n2]\nnoise\n");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].sinks(), ["F1"]);
/// ```
pub fn parse_str(content: &str) -> Vec<GroupRecord> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_line)
        .collect()
}

/// Parses a single group line, returning `None` if it does not match.
///
/// Leading whitespace is not skipped here; [`parse_str`] trims lines first.
pub fn parse_line(line: &str) -> Option<GroupRecord> {
    let caps = GROUP_LINE_RE.captures(line)?;

    let group_num = &caps[1];
    let source = &caps[2];
    let sinks = parse_sink_list(&caps[3]);
    let nets = parse_net_list(&caps[4]);

    Some(GroupRecord::new(group_num, source, sinks, nets))
}

/// Splits a sink field into FPGA identifiers, dropping `(count)` suffixes.
///
/// The literal `unknown` yields an empty list.
pub fn parse_sink_list(field: &str) -> Vec<String> {
    if field == UNKNOWN_SINKS {
        return Vec::new();
    }
    field
        .split(',')
        .map(|sink| SINK_COUNT_RE.replace_all(sink, "").trim().to_string())
        .collect()
}

/// Splits a bracketed net field into trimmed net identifiers.
///
/// A blank field yields an empty list.
pub fn parse_net_list(field: &str) -> Vec<String> {
    if field.trim().is_empty() {
        return Vec::new();
    }
    field.split(',').map(|net| net.trim().to_string()).collect()
}
