//! # netmerge-core
//!
//! Consolidation of FPGA net group reports.
//!
//! A net group report lists, one per line, a source FPGA, the sink FPGAs it
//! drives (with per-sink counts) and the nets that follow that route. This
//! crate merges every group with the same source and sink set, whatever the
//! counts or sink order, and renders the merged groups as a new report.
//!
//! # Modules
//!
//! - [`parser`]: reading `Group [n]: ...` lines into [`GroupRecord`]s
//! - [`consolidate`]: merging records by [`ConnectionKey`]
//! - [`report`]: rendering a [`Consolidation`] plus [`Statistics`]
//!
//! # Example
//!
//! ```rust
//! use netmerge_core::{consolidate_str, ReportOptions};
//!
//! let input = "\
//! Group [1]: F0 -> F1(2),F2(1) -> [n1, n2]
//! Group [2]: F0 -> F2(5),F1(3) -> [n3]
//! ";
//!
//! let report = consolidate_str(input, &ReportOptions::default());
//! assert_eq!(report.parsed_groups(), 2);
//! assert!(report.text().contains("Consolidated_Group [1]: F0 -> F1,F2 -> [n1, n2, n3]"));
//! ```

#![warn(clippy::all)]

pub mod consolidate;
pub mod error;
pub mod parser;
pub mod report;
pub mod types;

mod proptests;

use std::path::Path;

pub use consolidate::{consolidate, ConsolidatedGroup, Consolidation};
pub use error::{Error, Result};
pub use report::{render, ReportOptions, Statistics};
pub use types::{ConnectionKey, GroupRecord, SinkPattern};

/// Result of running the whole pipeline over one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    parsed_groups: usize,
    statistics: Statistics,
    text: String,
}

impl Report {
    /// Builds a report from an existing consolidation.
    pub fn from_consolidation(consolidation: &Consolidation, options: &ReportOptions) -> Self {
        Self {
            parsed_groups: consolidation.original_group_count(),
            statistics: Statistics::of(consolidation),
            text: render(consolidation, options),
        }
    }

    /// Number of group lines that were parsed.
    pub fn parsed_groups(&self) -> usize {
        self.parsed_groups
    }

    /// Summary counts for the report.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Rendered report text, without a trailing newline.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Writes the report text to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.text).map_err(|e| Error::io_with_path(e, path))?;
        tracing::debug!(path = %path.display(), bytes = self.text.len(), "Wrote report");
        Ok(())
    }
}

/// Parses, consolidates and renders report text held in memory.
pub fn consolidate_str(content: &str, options: &ReportOptions) -> Report {
    let consolidation = consolidate(parser::parse_str(content));
    Report::from_consolidation(&consolidation, options)
}

/// Parses, consolidates and renders the report stored at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the input cannot be read.
pub fn consolidate_file(path: impl AsRef<Path>, options: &ReportOptions) -> Result<Report> {
    let consolidation = consolidate(parser::parse_file(path)?);
    Ok(Report::from_consolidation(&consolidation, options))
}
