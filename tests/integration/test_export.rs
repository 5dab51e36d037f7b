//! Integration tests for `depgraph export`

use crate::helpers::{TestDir, run_depgraph, run_depgraph_json, sample_document};
use anyhow::Result;
use serde_json::json;

#[test]
fn test_export_json_preserves_nodes_and_edges() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_json("graph.json", &sample_document())?;

  let exported = run_depgraph_json(&dir.path, &["export", "graph.json", "--kind", "target"])?;
  let nodes = exported["nodes"].as_array().expect("nodes array");
  assert_eq!(nodes.len(), 2);
  assert_eq!(nodes[0]["kind"], "target");
  assert_eq!(nodes[0]["id"], "//app:app_java");
  assert_eq!(nodes[0]["classes"], json!(["a.A", "a.B"]));
  assert_eq!(
    exported["edges"],
    json!([{ "begin": "//app:app_java", "end": "//base:base_java" }])
  );

  Ok(())
}

#[test]
fn test_export_dot_uses_short_names() -> Result<()> {
  let dir = TestDir::new()?;
  let graph = json!({
    "nodes": [
      { "name": "org.chromium.base", "meta": { "classes": [] } },
      { "name": "org.chromium.net", "meta": { "classes": [] } }
    ],
    "edges": [{ "begin": "org.chromium.net", "end": "org.chromium.base" }]
  });
  dir.write_json("packages.json", &graph)?;

  let output = run_depgraph(&dir.path, &["export", "packages.json", "-k", "package", "--format", "dot"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.starts_with("digraph"), "got: {}", stdout);
  assert!(stdout.contains("label=\"o.c.base\""));
  assert!(stdout.contains("1 -> 0"));

  Ok(())
}

#[test]
fn test_export_honors_naming_config() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_json("graph.json", &sample_document())?;
  dir.write_file(
    ".depgraph.toml",
    "[naming]\ntarget_prefixes = [{ prefix = \"//app:\", replacement = \"app:\" }]\n",
  )?;

  let exported = run_depgraph_json(&dir.path, &["export", "graph.json", "--kind", "target"])?;
  assert_eq!(exported["nodes"][0]["short_name"], "app:app_java");
  assert_eq!(exported["nodes"][1]["short_name"], "//base:base_java");

  Ok(())
}
