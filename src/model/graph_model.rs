//! Dependency graph model backed by petgraph
//!
//! ## Graph Structure
//!
//! - **Directed Graph**: `A → B` means "A depends on B"
//! - **Nodes**: classes, packages or build targets (one kind per model)
//! - **Edges**: unweighted; at most one per ordered pair
//! - **Index**: node identifier → node index, plus the set of endpoint pairs
//! - **Algorithms**: shortest path (BFS), SCC cycles, DOT export
//!
//! The model is append-only. The loader populates it once and consumers only
//! read it afterwards, which suits petgraph's `Graph` (stable indices as long as
//! nothing is removed).

use super::node::GraphNode;
use crate::core::error::{GraphResult, LoadError};
use petgraph::Direction;
use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet, VecDeque};

/// Opaque handle to a node inside one [`GraphModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(NodeIndex);

/// Outcome of [`GraphModel::add_node_if_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeInsert {
  /// The identifier was new and the node was stored
  Added(NodeHandle),
  /// An identical node was already stored
  Duplicate(NodeHandle),
  /// A different node with the same identifier was already stored; it was kept
  Conflict(NodeHandle),
}

/// A directed edge, borrowed from its model.
#[derive(Debug, Clone, Copy)]
pub struct Edge<'a> {
  pub begin: &'a GraphNode,
  pub end: &'a GraphNode,
}

impl Edge<'_> {
  /// Textual edge id, `"<begin> > <end>"`.
  pub fn id(&self) -> String {
    format!("{} > {}", self.begin.id(), self.end.id())
  }
}

impl PartialEq for Edge<'_> {
  fn eq(&self, other: &Self) -> bool {
    self.begin.id() == other.begin.id() && self.end.id() == other.end.id()
  }
}

impl Eq for Edge<'_> {}

/// Dependency graph for one loaded document.
#[derive(Debug, Default)]
pub struct GraphModel {
  /// Nodes: GraphNode, Edges: unit
  graph: DiGraph<GraphNode, ()>,

  /// Index: node identifier → node index
  id_to_node: HashMap<String, NodeIndex>,

  /// Endpoint pairs already connected
  edge_pairs: HashSet<(NodeIndex, NodeIndex)>,
}

impl GraphModel {
  pub fn new() -> Self {
    Self::default()
  }

  /// Store `node` unless its identifier is already taken.
  ///
  /// The first node stored under an identifier always wins; the return value
  /// tells the caller whether a later record agreed with it.
  pub fn add_node_if_new(&mut self, node: GraphNode) -> NodeInsert {
    if let Some(&idx) = self.id_to_node.get(node.id()) {
      return if self.graph[idx] == node {
        NodeInsert::Duplicate(NodeHandle(idx))
      } else {
        NodeInsert::Conflict(NodeHandle(idx))
      };
    }

    let id = node.id().to_string();
    let idx = self.graph.add_node(node);
    self.id_to_node.insert(id, idx);
    NodeInsert::Added(NodeHandle(idx))
  }

  /// Connect `begin → end` unless that ordered pair is already connected.
  ///
  /// Returns `true` when a new edge was stored.
  pub fn add_edge_if_new(&mut self, begin: NodeHandle, end: NodeHandle) -> bool {
    if !self.edge_pairs.insert((begin.0, end.0)) {
      return false;
    }
    self.graph.add_edge(begin.0, end.0, ());
    true
  }

  /// Resolve an identifier to a handle for edge insertion.
  pub fn resolve(&self, id: &str) -> Option<NodeHandle> {
    self.id_to_node.get(id).copied().map(NodeHandle)
  }

  pub fn get_node_by_id(&self, id: &str) -> Option<&GraphNode> {
    self.id_to_node.get(id).map(|idx| &self.graph[*idx])
  }

  pub fn node(&self, handle: NodeHandle) -> &GraphNode {
    &self.graph[handle.0]
  }

  pub fn contains(&self, id: &str) -> bool {
    self.id_to_node.contains_key(id)
  }

  pub fn node_count(&self) -> usize {
    self.graph.node_count()
  }

  pub fn edge_count(&self) -> usize {
    self.graph.edge_count()
  }

  pub fn is_empty(&self) -> bool {
    self.graph.node_count() == 0
  }

  /// All nodes in insertion order.
  pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
    self.graph.node_indices().map(|idx| &self.graph[idx])
  }

  /// All edges in insertion order.
  pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
    self.graph.edge_references().map(|e| Edge {
      begin: &self.graph[e.source()],
      end: &self.graph[e.target()],
    })
  }

  /// Direct dependencies of a node (what it uses), sorted by id.
  pub fn outbound(&self, id: &str) -> GraphResult<Vec<&GraphNode>> {
    self.neighbors(id, Direction::Outgoing)
  }

  /// Direct dependents of a node (what uses it), sorted by id.
  pub fn inbound(&self, id: &str) -> GraphResult<Vec<&GraphNode>> {
    self.neighbors(id, Direction::Incoming)
  }

  pub fn out_degree(&self, id: &str) -> GraphResult<usize> {
    let idx = self.find_node(id)?;
    Ok(self.graph.neighbors_directed(idx, Direction::Outgoing).count())
  }

  pub fn in_degree(&self, id: &str) -> GraphResult<usize> {
    let idx = self.find_node(id)?;
    Ok(self.graph.neighbors_directed(idx, Direction::Incoming).count())
  }

  /// Find dependency path: why does `from` depend on `to`?
  ///
  /// Returns the shortest chain of ids following edge direction, or None if
  /// `to` is unreachable. A node trivially reaches itself.
  pub fn shortest_path(&self, from: &str, to: &str) -> GraphResult<Option<Vec<String>>> {
    let from_idx = self.find_node(from)?;
    let to_idx = self.find_node(to)?;

    let mut queue = VecDeque::new();
    let mut visited = HashMap::new();

    queue.push_back(from_idx);
    visited.insert(from_idx, None);

    while let Some(current) = queue.pop_front() {
      if current == to_idx {
        let mut path = vec![];
        let mut node = Some(current);

        while let Some(idx) = node {
          path.push(self.graph[idx].id().to_string());
          node = visited[&idx];
        }

        path.reverse();
        return Ok(Some(path));
      }

      for neighbor in self.graph.neighbors_directed(current, Direction::Outgoing) {
        if let std::collections::hash_map::Entry::Vacant(e) = visited.entry(neighbor) {
          e.insert(Some(current));
          queue.push_back(neighbor);
        }
      }
    }

    Ok(None)
  }

  /// Detect dependency cycles using Tarjan's SCC algorithm.
  ///
  /// Returns strongly connected components with more than one member, plus
  /// nodes that depend on themselves. Members and components are sorted so
  /// output is stable across runs.
  pub fn find_cycles(&self) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<String>> = algo::tarjan_scc(&self.graph)
      .into_iter()
      .filter(|component| match component.as_slice() {
        [idx] => self.graph.contains_edge(*idx, *idx),
        _ => true,
      })
      .map(|component| {
        let mut ids: Vec<String> = component
          .into_iter()
          .map(|idx| self.graph[idx].id().to_string())
          .collect();
        ids.sort();
        ids
      })
      .collect();

    cycles.sort();
    cycles
  }

  /// Export graph to DOT format (Graphviz), labelled with short names.
  ///
  /// # Example
  /// ```bash
  /// depgraph export graph.json --format dot > graph.dot
  /// dot -Tsvg graph.dot -o graph.svg
  /// ```
  pub fn to_dot(&self) -> String {
    use petgraph::dot::{Config, Dot};

    let dot = Dot::with_attr_getters(
      &self.graph,
      &[Config::EdgeNoLabel, Config::NodeNoLabel],
      &|_, _| String::new(),
      &|_, (_idx, node)| {
        format!(
          "label=\"{}\" tooltip=\"{}\" shape=box",
          escape_dot(node.short_name()),
          escape_dot(node.display_name())
        )
      },
    );

    format!("{:?}", dot)
  }

  /// Export the model as `{ "nodes": [...], "edges": [{ "begin", "end" }] }`.
  pub fn to_json(&self) -> Value {
    let nodes: Vec<Value> = self
      .nodes()
      .map(|node| {
        let mut value = json!(node);
        value["display_name"] = json!(node.display_name());
        value
      })
      .collect();
    let edges: Vec<Value> = self
      .edges()
      .map(|edge| json!({ "begin": edge.begin.id(), "end": edge.end.id() }))
      .collect();

    json!({ "nodes": nodes, "edges": edges })
  }

  fn neighbors(&self, id: &str, direction: Direction) -> GraphResult<Vec<&GraphNode>> {
    let idx = self.find_node(id)?;

    let mut nodes: Vec<&GraphNode> = self
      .graph
      .neighbors_directed(idx, direction)
      .map(|n| &self.graph[n])
      .collect();

    nodes.sort_by(|a, b| a.id().cmp(b.id()));
    Ok(nodes)
  }

  /// Find node index by identifier.
  fn find_node(&self, id: &str) -> GraphResult<NodeIndex> {
    self
      .id_to_node
      .get(id)
      .copied()
      .ok_or_else(|| LoadError::UnknownNode { id: id.to_string() }.into())
  }
}

fn escape_dot(s: &str) -> String {
  s.replace('\\', "\\\\").replace('"', "\\\"")
}
