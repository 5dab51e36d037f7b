//! Integration tests for `depgraph deps`, `path` and `cycles`

use crate::helpers::{TestDir, run_depgraph, run_depgraph_json, sample_document};
use anyhow::Result;
use serde_json::json;

#[test]
fn test_deps_forward_and_reverse() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_json("graph.json", &sample_document())?;

  let forward = run_depgraph_json(&dir.path, &["deps", "graph.json", "a.A", "--json"])?;
  assert_eq!(forward["relation"], "dependencies");
  assert_eq!(forward["nodes"], json!(["a.B"]));

  let reverse = run_depgraph_json(&dir.path, &["deps", "graph.json", "a.A", "--reverse", "--json"])?;
  assert_eq!(reverse["relation"], "dependents");
  assert_eq!(reverse["nodes"], json!(["b.C"]));

  let output = run_depgraph(&dir.path, &["deps", "graph.json", "b.D"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("Direct dependencies of b.D: 0"), "got: {}", stdout);

  Ok(())
}

#[test]
fn test_path_between_targets() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_json("graph.json", &sample_document())?;

  let found = run_depgraph_json(
    &dir.path,
    &["path", "graph.json", "--kind", "target", "//app:app_java", "//base:base_java", "--json"],
  )?;
  assert_eq!(found["path"], json!(["//app:app_java", "//base:base_java"]));

  let missing = run_depgraph_json(
    &dir.path,
    &["path", "graph.json", "--kind", "target", "//base:base_java", "//app:app_java", "--json"],
  )?;
  assert!(missing["path"].is_null());

  let output = run_depgraph(&dir.path, &["path", "graph.json", "a.A", "b.C"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("a.A → a.B → b.C"), "got: {}", stdout);

  Ok(())
}

#[test]
fn test_cycles() -> Result<()> {
  let dir = TestDir::new()?;
  dir.write_json("graph.json", &sample_document())?;

  let classes = run_depgraph_json(&dir.path, &["cycles", "graph.json", "--json"])?;
  assert_eq!(classes["cycles"], json!([["a.A", "a.B", "b.C"]]));

  let packages = run_depgraph_json(&dir.path, &["cycles", "graph.json", "--kind", "package", "--json"])?;
  assert_eq!(packages["cycle_count"], 1);

  let output = run_depgraph(&dir.path, &["cycles", "graph.json", "--kind", "target"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("No dependency cycles"), "got: {}", stdout);

  Ok(())
}
