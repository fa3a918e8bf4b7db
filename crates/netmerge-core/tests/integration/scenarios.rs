//! Small in-memory scenarios.

use netmerge_core::parser::parse_str;
use netmerge_core::{consolidate, consolidate_str, ConnectionKey, ReportOptions, SinkPattern};

fn body_only() -> ReportOptions {
    ReportOptions {
        header: false,
        statistics: false,
    }
}

#[test]
fn test_permuted_sinks_merge() {
    let report = consolidate_str(
        "Group [1]: F0 -> F1(2),F2(1) -> [n1, n2]\nGroup [2]: F0 -> F2(5),F1(3) -> [n3]",
        &body_only(),
    );
    assert_eq!(
        report.text(),
        "Consolidated_Group [1]: F0 -> F1,F2 -> [n1, n2, n3]"
    );
}

#[test]
fn test_unknown_sinks_stay_separate() {
    let report = consolidate_str(
        "Group [1]: F0 -> F1 -> [n1]\nGroup [3]: F0 -> unknown -> [n4]",
        &body_only(),
    );
    assert_eq!(
        report.text(),
        "Consolidated_Group [1]: F0 -> F1 -> [n1]\nConsolidated_Group [2]: F0 -> unknown -> [n4]"
    );
}

#[test]
fn test_garbage_line_is_dropped() {
    let report = consolidate_str("this is not a group line", &ReportOptions::default());
    assert_eq!(report.parsed_groups(), 0);
    assert!(report.text().contains("# Original groups: 0"));
}

#[test]
fn test_same_sinks_different_source() {
    let consolidation = consolidate(parse_str(
        "Group [1]: F0 -> F2 -> [a]\nGroup [2]: F1 -> F2 -> [b]\nGroup [3]: F0 -> F2 -> [c]",
    ));
    assert_eq!(consolidation.len(), 2);

    let key = ConnectionKey::new("F1", SinkPattern::Fpgas(vec!["F2".to_string()]));
    let group = consolidation.get(&key).unwrap();
    assert_eq!(group.nets().collect::<Vec<_>>(), ["b"]);
}

#[test]
fn test_rendered_sinks_match_stripped_input() {
    let input = "Group [1]: F4 -> F9 (3),F2 (7),F5 (1) -> [x]";
    let records = parse_str(input);
    let record = &records[0];
    let report = consolidate_str(input, &body_only());

    let mut sinks = record.sinks().to_vec();
    sinks.sort();
    let expected = format!("Consolidated_Group [1]: F4 -> {} -> [x]", sinks.join(","));
    assert_eq!(report.text(), expected);
}

#[test]
fn test_unusual_group_numbers_still_merge() {
    let report = consolidate_str(
        "Group [1]: F0 -> F1 -> [a]\n\
         Group [99999999999999999999999]: F0 -> F1 -> [b]\n\
         Group [\u{0663}]: F0 -> F2 -> [c]",
        &body_only(),
    );
    assert_eq!(report.parsed_groups(), 3);
    assert_eq!(
        report.text(),
        "Consolidated_Group [1]: F0 -> F1 -> [a, b]\nConsolidated_Group [2]: F0 -> F2 -> [c]"
    );
}
