//! Reading graph documents from disk
//!
//! The generator writes a single document with one section per graph kind:
//!
//! ```json
//! {
//!   "class_graph":   { "nodes": [...], "edges": [...] },
//!   "package_graph": { "nodes": [...], "edges": [...] },
//!   "target_graph":  { "nodes": [...], "edges": [...] },
//!   "build_metadata": { ... }
//! }
//! ```
//!
//! A bare `{ "nodes", "edges" }` object is accepted as well.

use super::kinds::parse_graph_value;
use crate::core::config::DepGraphConfig;
use crate::core::error::{GraphResult, LoadError, ResultExt};
use crate::model::{GraphKind, GraphModel};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Pick the graph for `kind` out of a parsed document.
pub fn select_graph(mut document: Value, kind: GraphKind) -> GraphResult<Value> {
  if let Some(section) = document.get_mut(kind.section_key()) {
    return Ok(section.take());
  }

  if document.get("nodes").is_some() {
    return Ok(document);
  }

  Err(
    LoadError::MissingSection {
      kind: kind.as_str().to_string(),
    }
    .into(),
  )
}

/// Read a graph document from `path` and load the graph for `kind`.
pub fn read_graph_file(path: &Path, kind: GraphKind, config: &DepGraphConfig) -> GraphResult<GraphModel> {
  let text = fs::read_to_string(path).with_context(|| format!("Failed to read graph from {}", path.display()))?;
  let document: Value = serde_json::from_str(&text).map_err(|e| LoadError::MalformedInput {
    reason: format!("{}: {}", path.display(), e),
  })?;

  parse_graph_value(kind, select_graph(document, kind)?, config)
}
