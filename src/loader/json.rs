//! Generic JSON graph loading
//!
//! Algorithm:
//! 1. Build every node record with the injected factory and register it by id
//! 2. Resolve every edge record's `begin`/`end` through the id index
//! 3. Register the edge unless the ordered pair already exists
//!
//! The loader never sees raw JSON text. Callers deserialize into
//! [`JsonGraph`] first, so shape errors surface before any node is built.

use crate::core::error::{EdgeEndpoint, GraphError, GraphResult, LoadError};
use crate::model::{GraphModel, GraphNode, NodeHandle, NodeInsert};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// A graph as written by the generator: node records plus `begin → end` edges.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonGraph<N> {
  pub nodes: Vec<N>,
  pub edges: Vec<JsonEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JsonEdge {
  pub begin: String,
  pub end: String,
}

impl<N: DeserializeOwned> JsonGraph<N> {
  /// Deserialize from an already-parsed JSON value.
  pub fn from_value(value: Value) -> GraphResult<Self> {
    serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
  }

  /// Deserialize from JSON text.
  pub fn from_json_str(text: &str) -> GraphResult<Self> {
    serde_json::from_str(text).map_err(|e| malformed(e.to_string()))
  }
}

fn malformed(reason: String) -> GraphError {
  LoadError::MalformedInput { reason }.into()
}

/// What to do when two node records share an id but describe different nodes.
///
/// Identical records are always merged silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
  /// Fail the load with `ConflictingNode`
  #[default]
  Reject,
  /// Keep the first record and log the later one
  KeepFirst,
}

/// Load a graph with the default duplicate policy.
pub fn load<N, F>(json_graph: JsonGraph<N>, make_node: F) -> GraphResult<GraphModel>
where
  F: FnMut(N) -> GraphNode,
{
  load_with_policy(json_graph, make_node, DuplicatePolicy::default())
}

/// Load a graph, building each node with `make_node`.
///
/// Fails on the first edge that names an unknown node, or on the first
/// conflicting node when `policy` is [`DuplicatePolicy::Reject`]. No partial
/// model is returned.
pub fn load_with_policy<N, F>(json_graph: JsonGraph<N>, mut make_node: F, policy: DuplicatePolicy) -> GraphResult<GraphModel>
where
  F: FnMut(N) -> GraphNode,
{
  let JsonGraph { nodes, edges } = json_graph;
  debug!(nodes = nodes.len(), edges = edges.len(), "loading graph");

  let mut model = GraphModel::new();

  for record in nodes {
    let node = make_node(record);
    match model.add_node_if_new(node) {
      NodeInsert::Added(_) => {}
      NodeInsert::Duplicate(handle) => {
        debug!(id = model.node(handle).id(), "skipping duplicate node record");
      }
      NodeInsert::Conflict(handle) => {
        let id = model.node(handle).id().to_string();
        match policy {
          DuplicatePolicy::Reject => return Err(LoadError::ConflictingNode { id }.into()),
          DuplicatePolicy::KeepFirst => {
            warn!(id = %id, "node redefined with different metadata, keeping first definition");
          }
        }
      }
    }
  }

  for (edge_index, edge) in edges.iter().enumerate() {
    let begin = resolve(&model, edge_index, EdgeEndpoint::Begin, &edge.begin)?;
    let end = resolve(&model, edge_index, EdgeEndpoint::End, &edge.end)?;
    if !model.add_edge_if_new(begin, end) {
      debug!(begin = %edge.begin, end = %edge.end, "skipping duplicate edge record");
    }
  }

  Ok(model)
}

fn resolve(model: &GraphModel, edge_index: usize, endpoint: EdgeEndpoint, id: &str) -> GraphResult<NodeHandle> {
  model.resolve(id).ok_or_else(|| {
    LoadError::DanglingEdge {
      edge_index,
      endpoint,
      id: id.to_string(),
    }
    .into()
  })
}
