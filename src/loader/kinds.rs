//! Per-kind node records and the class/package/target specializations
//!
//! Each specialization only fixes the record type and the factory; the
//! generic loader does the rest.

use super::json::{JsonGraph, load_with_policy};
use crate::core::config::DepGraphConfig;
use crate::core::error::GraphResult;
use crate::model::{ClassNode, GraphKind, GraphModel, GraphNode, PackageNode, TargetNode};
use crate::naming::NameShortener;
use serde::Deserialize;
use serde_json::Value;

/// `{ "name": "a.A", "meta": { "package": "a", "build_targets": ["//a:a"] } }`
#[derive(Debug, Clone, Deserialize)]
pub struct ClassNodeRecord {
  pub name: String,
  pub meta: ClassMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassMeta {
  pub package: String,
  pub build_targets: Vec<String>,
}

/// `{ "name": "a", "meta": { "classes": ["a.A", "a.B"] } }`, used by packages and targets
#[derive(Debug, Clone, Deserialize)]
pub struct MemberNodeRecord {
  pub name: String,
  pub meta: MemberMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberMeta {
  pub classes: Vec<String>,
}

/// Parse a class graph.
pub fn parse_class_graph(json_graph: JsonGraph<ClassNodeRecord>, config: &DepGraphConfig) -> GraphResult<GraphModel> {
  let shortener = NameShortener::from_config(&config.naming);
  let make_class_node = |record: ClassNodeRecord| {
    GraphNode::Class(ClassNode {
      short_name: shortener.shorten_class_name(&record.name),
      id: record.name,
      package: record.meta.package,
      build_targets: record.meta.build_targets.into_iter().collect(),
    })
  };
  load_with_policy(json_graph, make_class_node, config.loader.duplicate_nodes)
}

/// Parse a package graph.
pub fn parse_package_graph(json_graph: JsonGraph<MemberNodeRecord>, config: &DepGraphConfig) -> GraphResult<GraphModel> {
  let shortener = NameShortener::from_config(&config.naming);
  let make_package_node = |record: MemberNodeRecord| {
    GraphNode::Package(PackageNode {
      short_name: shortener.shorten_package_name(&record.name),
      id: record.name,
      classes: record.meta.classes.into_iter().collect(),
    })
  };
  load_with_policy(json_graph, make_package_node, config.loader.duplicate_nodes)
}

/// Parse a build target graph.
pub fn parse_target_graph(json_graph: JsonGraph<MemberNodeRecord>, config: &DepGraphConfig) -> GraphResult<GraphModel> {
  let shortener = NameShortener::from_config(&config.naming);
  let make_target_node = |record: MemberNodeRecord| {
    GraphNode::Target(TargetNode {
      short_name: shortener.shorten_target_name(&record.name),
      id: record.name,
      classes: record.meta.classes.into_iter().collect(),
    })
  };
  load_with_policy(json_graph, make_target_node, config.loader.duplicate_nodes)
}

/// Deserialize `value` as a graph of `kind` and load it.
pub fn parse_graph_value(kind: GraphKind, value: Value, config: &DepGraphConfig) -> GraphResult<GraphModel> {
  match kind {
    GraphKind::Class => parse_class_graph(JsonGraph::from_value(value)?, config),
    GraphKind::Package => parse_package_graph(JsonGraph::from_value(value)?, config),
    GraphKind::Target => parse_target_graph(JsonGraph::from_value(value)?, config),
  }
}
