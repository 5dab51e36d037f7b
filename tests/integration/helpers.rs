//! Test helpers for integration tests

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch directory holding graph documents and config files
pub struct TestDir {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestDir {
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Write `value` as `name` and return its path
  pub fn write_json(&self, name: &str, value: &Value) -> Result<PathBuf> {
    let file = self.path.join(name);
    std::fs::write(&file, serde_json::to_string_pretty(value)?)?;
    Ok(file)
  }

  pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
    let file = self.path.join(name);
    if let Some(parent) = file.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file, content)?;
    Ok(file)
  }
}

/// Class node record as the generator writes it
pub fn class_record(name: &str, package: &str, targets: &[&str]) -> Value {
  json!({ "name": name, "meta": { "package": package, "build_targets": targets } })
}

pub fn edge(begin: &str, end: &str) -> Value {
  json!({ "begin": begin, "end": end })
}

/// Combined generator document:
///
/// classes: a.A → a.B → b.C → a.A (cycle), b.D isolated
/// packages: a ⇄ b
/// targets: //app:app_java → //base:base_java
pub fn sample_document() -> Value {
  json!({
    "class_graph": {
      "nodes": [
        class_record("a.A", "a", &["//app:app_java"]),
        class_record("a.B", "a", &["//app:app_java"]),
        class_record("b.C", "b", &["//base:base_java"]),
        class_record("b.D", "b", &["//base:base_java"])
      ],
      "edges": [edge("a.A", "a.B"), edge("a.B", "b.C"), edge("b.C", "a.A")]
    },
    "package_graph": {
      "nodes": [
        { "name": "a", "meta": { "classes": ["a.A", "a.B"] } },
        { "name": "b", "meta": { "classes": ["b.C", "b.D"] } }
      ],
      "edges": [edge("a", "b"), edge("b", "a")]
    },
    "target_graph": {
      "nodes": [
        { "name": "//app:app_java", "meta": { "classes": ["a.A", "a.B"] } },
        { "name": "//base:base_java", "meta": { "classes": ["b.C", "b.D"] } }
      ],
      "edges": [edge("//app:app_java", "//base:base_java")]
    },
    "build_metadata": { "commit_hash": "0123abcd" }
  })
}

/// Run depgraph and return its output without checking the exit status
pub fn run_depgraph_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let depgraph_bin = env!("CARGO_BIN_EXE_depgraph");

  Command::new(depgraph_bin)
    .current_dir(cwd)
    .env_remove("DEPGRAPH_LOG")
    .args(args)
    .output()
    .context("Failed to run depgraph")
}

/// Run depgraph and fail unless it exits successfully
pub fn run_depgraph(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_depgraph_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "depgraph command failed: depgraph {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run depgraph and parse stdout as JSON
pub fn run_depgraph_json(cwd: &Path, args: &[&str]) -> Result<Value> {
  let output = run_depgraph(cwd, args)?;
  serde_json::from_slice(&output.stdout).context("depgraph stdout is not JSON")
}
