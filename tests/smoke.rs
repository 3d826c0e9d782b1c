//! Integration smoke tests for `famgraph`

use famgraph::core::graph::GraphEmitter;
use famgraph::core::records::parse_family_str;
use famgraph::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn csv_text_becomes_dot() {
    let records = parse_family_str("Person_ID,Full_Name\nP1,Solo Person\n").unwrap();
    let dot = GraphEmitter::default().emit(&records).to_dot();

    assert!(dot.starts_with("digraph family_tree {"));
    assert!(dot.contains("\"P1\" [label=\"Solo Person\\nBirth: Unknown\", fillcolor=\"gold\""));
}
