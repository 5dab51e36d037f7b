//! Integration tests for `depgraph summary`

use crate::helpers::{TestDir, class_record, edge, run_depgraph, run_depgraph_json, sample_document};
use anyhow::Result;
use serde_json::json;

#[test]
fn test_summary_class_graph_text() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_json("graph.json", &sample_document())?;

  let output = run_depgraph(&dir.path, &["summary", "graph.json"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Nodes: 4"), "got: {}", stdout);
  assert!(stdout.contains("Edges: 3"), "got: {}", stdout);
  assert!(stdout.contains("b.D"));

  Ok(())
}

#[test]
fn test_summary_json_per_kind() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_json("graph.json", &sample_document())?;

  let classes = run_depgraph_json(&dir.path, &["summary", "graph.json", "--json"])?;
  assert_eq!(classes["kind"], "class");
  assert_eq!(classes["summary"]["node_count"], 4);

  let packages = run_depgraph_json(&dir.path, &["summary", "graph.json", "--kind", "package", "--json"])?;
  assert_eq!(packages["kind"], "package");
  assert_eq!(packages["summary"], json!({ "node_count": 2, "edge_count": 2 }));

  let targets = run_depgraph_json(&dir.path, &["summary", "graph.json", "-k", "target", "--json"])?;
  assert_eq!(targets["summary"]["edge_count"], 1);
  assert_eq!(targets["nodes"][0]["id"], "//app:app_java");
  assert_eq!(targets["nodes"][0]["outbound"], 1);
  assert_eq!(targets["nodes"][1]["inbound"], 1);

  Ok(())
}

#[test]
fn test_summary_spec_example_with_duplicate_edge() -> Result<()> {
  let dir = TestDir::new()?;
  let graph = json!({
    "nodes": [class_record("a.A", "a", &["t1"]), class_record("a.B", "a", &["t1"])],
    "edges": [edge("a.A", "a.B"), edge("a.A", "a.B")]
  });
  dir.write_json("bare.json", &graph)?;

  let summary = run_depgraph_json(&dir.path, &["summary", "bare.json", "--json"])?;
  assert_eq!(summary["summary"], json!({ "node_count": 2, "edge_count": 1 }));
  assert_eq!(summary["nodes"][0]["id"], "a.A");
  assert_eq!(summary["nodes"][1]["id"], "a.B");

  Ok(())
}

#[test]
fn test_summary_identical_duplicate_nodes_merge() -> Result<()> {
  let dir = TestDir::new()?;
  let graph = json!({
    "nodes": [class_record("a.A", "a", &["t1"]), class_record("a.A", "a", &["t1"])],
    "edges": []
  });
  dir.write_json("dup.json", &graph)?;

  let summary = run_depgraph_json(&dir.path, &["summary", "dup.json", "--json"])?;
  assert_eq!(summary["summary"]["node_count"], 1);

  Ok(())
}
