//! Rendering of consolidated net groups.
//!
//! The report mirrors the input format so it can be read back by hand:
//!
//! ```text
//! # Consolidated Net Groups by FPGA Connection Pattern
//! # Format: Consolidated_Group: Source_FPGA -> Sink_FPGA1,Sink_FPGA2 -> [net_id1, net_id2, ...]
//!
//! Consolidated_Group [1]: F0 -> F1,F2 -> [n1, n2, n3]
//!
//! # Statistics:
//! # Original groups: 2
//! # Consolidated groups: 1
//! # Total nets: 2
//! ```

use serde::Deserialize;

use crate::consolidate::Consolidation;

const TITLE_LINE: &str = "# Consolidated Net Groups by FPGA Connection Pattern";
const FORMAT_LINE: &str =
    "# Format: Consolidated_Group: Source_FPGA -> Sink_FPGA1,Sink_FPGA2 -> [net_id1, net_id2, ...]";

/// Which optional sections a report contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportOptions {
    /// Emit the title and format comment lines.
    #[serde(default = "default_true")]
    pub header: bool,

    /// Emit the statistics block.
    #[serde(default = "default_true")]
    pub statistics: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            header: default_true(),
            statistics: default_true(),
        }
    }
}

/// Summary counts printed at the end of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Number of group records that were consolidated.
    pub original_groups: usize,
    /// Number of distinct connection patterns.
    pub consolidated_groups: usize,
    /// Sum of the *first* member's net count for each consolidated group.
    ///
    /// Nets contributed by later members are not counted, so this undercounts
    /// whenever groups were merged. Kept as-is to match existing reports.
    pub total_nets: usize,
}

impl Statistics {
    /// Computes statistics for a consolidation.
    pub fn of(consolidation: &Consolidation) -> Self {
        Self {
            original_groups: consolidation.original_group_count(),
            consolidated_groups: consolidation.len(),
            total_nets: consolidation
                .iter()
                .map(|(_, group)| group.first().nets().len())
                .sum(),
        }
    }
}

/// Renders a consolidation as report text, without a trailing newline.
pub fn render(consolidation: &Consolidation, options: &ReportOptions) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(consolidation.len() + 8);

    if options.header {
        lines.push(TITLE_LINE.to_string());
        lines.push(FORMAT_LINE.to_string());
        lines.push(String::new());
    }

    for (index, (key, group)) in consolidation.iter().enumerate() {
        lines.push(format!(
            "Consolidated_Group [{}]: {} -> {} -> [{}]",
            index + 1,
            key.source(),
            key.sinks(),
            group.nets().collect::<Vec<_>>().join(", ")
        ));
    }

    if options.statistics {
        let stats = Statistics::of(consolidation);
        lines.push(String::new());
        lines.push("# Statistics:".to_string());
        lines.push(format!("# Original groups: {}", stats.original_groups));
        lines.push(format!("# Consolidated groups: {}", stats.consolidated_groups));
        lines.push(format!("# Total nets: {}", stats.total_nets));
    }

    lines.join("\n")
}
