//! File-based pipeline tests.

use netmerge_core::{consolidate_file, parser, Error, ReportOptions};

use crate::common::{Workspace, GROUPED_REPORT};

const EXPECTED_REPORT: &str = "\
# Consolidated Net Groups by FPGA Connection Pattern
# Format: Consolidated_Group: Source_FPGA -> Sink_FPGA1,Sink_FPGA2 -> [net_id1, net_id2, ...]

Consolidated_Group [1]: F1 -> F2,F3 -> [net1, net4, net7, net11]
Consolidated_Group [2]: F2 -> F1 -> [net2, net8]
Consolidated_Group [3]: F1 -> unknown -> [net9, net10]
Consolidated_Group [4]: F3 -> F1,F2 -> [net3, net5, net6]

# Statistics:
# Original groups: 7
# Consolidated groups: 4
# Total nets: 8";

#[test]
fn test_consolidate_file_end_to_end() {
    let ws = Workspace::new();
    let input = ws.file("net_groups.txt", GROUPED_REPORT);

    let report = consolidate_file(&input, &ReportOptions::default()).unwrap();

    assert_eq!(report.parsed_groups(), 7);
    assert_eq!(report.text(), EXPECTED_REPORT);
}

#[test]
fn test_total_nets_is_first_member_sum() {
    let ws = Workspace::new();
    let input = ws.file("net_groups.txt", GROUPED_REPORT);

    let report = consolidate_file(&input, &ReportOptions::default()).unwrap();

    // 11 nets go in, but only first members are counted: 2 + 1 + 2 + 3.
    assert_eq!(report.statistics().total_nets, 8);
    assert_eq!(report.statistics().original_groups, 7);
    assert_eq!(report.statistics().consolidated_groups, 4);
}

#[test]
fn test_write_then_reparse_consolidated_output() {
    let ws = Workspace::new();
    let input = ws.file("net_groups.txt", GROUPED_REPORT);
    let output = ws.path("consolidated.txt");

    let report = consolidate_file(&input, &ReportOptions::default()).unwrap();
    report.write_to(&output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, EXPECTED_REPORT);

    // Consolidated lines are not group lines, so nothing parses back.
    assert!(parser::parse_file(&output).unwrap().is_empty());
}

#[test]
fn test_missing_input_is_io_error() {
    let ws = Workspace::new();
    let missing = ws.path("does_not_exist.txt");

    let err = consolidate_file(&missing, &ReportOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.path(), missing.as_path());
    assert!(err.to_string().contains("does_not_exist.txt"));
}

#[test]
fn test_non_utf8_input_is_io_error() {
    let ws = Workspace::new();
    let path = ws.path("binary.txt");
    std::fs::write(&path, [0x47, 0xff, 0xfe, 0x0a]).unwrap();

    let err = parser::parse_file(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_repeated_runs_are_independent() {
    let ws = Workspace::new();
    let input = ws.file("net_groups.txt", GROUPED_REPORT);

    let first = consolidate_file(&input, &ReportOptions::default()).unwrap();
    let second = consolidate_file(&input, &ReportOptions::default()).unwrap();
    assert_eq!(first, second);
}
