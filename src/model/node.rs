//! Graph node variants
//!
//! One node type per entity the generator emits. Variants only share the
//! identifier and name accessors, so they are a sum type rather than a trait.

use crate::core::error::{GraphError, GraphResult};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Which of the generator's three graphs a model was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
  Class,
  Package,
  Target,
}

impl GraphKind {
  /// Key of this graph inside a combined generator document.
  pub fn section_key(self) -> &'static str {
    match self {
      GraphKind::Class => "class_graph",
      GraphKind::Package => "package_graph",
      GraphKind::Target => "target_graph",
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      GraphKind::Class => "class",
      GraphKind::Package => "package",
      GraphKind::Target => "target",
    }
  }
}

impl FromStr for GraphKind {
  type Err = GraphError;

  fn from_str(s: &str) -> GraphResult<Self> {
    match s.to_lowercase().as_str() {
      "class" | "classes" => Ok(Self::Class),
      "package" | "packages" => Ok(Self::Package),
      "target" | "targets" => Ok(Self::Target),
      _ => Err(GraphError::message(format!(
        "Unknown graph kind '{}'. Valid kinds: class, package, target",
        s
      ))),
    }
  }
}

impl fmt::Display for GraphKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A Java class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassNode {
  /// Fully-qualified class name
  pub id: String,
  pub short_name: String,
  /// Owning package
  pub package: String,
  /// Build targets that compile this class
  pub build_targets: BTreeSet<String>,
}

/// A Java package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageNode {
  pub id: String,
  pub short_name: String,
  /// Fully-qualified names of the classes in this package
  pub classes: BTreeSet<String>,
}

/// A build target (e.g. `//chrome/android:chrome_java`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetNode {
  pub id: String,
  pub short_name: String,
  /// Fully-qualified names of the classes compiled by this target
  pub classes: BTreeSet<String>,
}

/// A node in a dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GraphNode {
  Class(ClassNode),
  Package(PackageNode),
  Target(TargetNode),
}

impl GraphNode {
  /// Stable identifier, unique within one graph.
  pub fn id(&self) -> &str {
    match self {
      GraphNode::Class(n) => &n.id,
      GraphNode::Package(n) => &n.id,
      GraphNode::Target(n) => &n.id,
    }
  }

  /// Human-readable name. The generator uses fully-qualified names as ids, so this is the id.
  pub fn display_name(&self) -> &str {
    self.id()
  }

  /// Abbreviated label for dense views.
  pub fn short_name(&self) -> &str {
    match self {
      GraphNode::Class(n) => &n.short_name,
      GraphNode::Package(n) => &n.short_name,
      GraphNode::Target(n) => &n.short_name,
    }
  }

  pub fn kind(&self) -> GraphKind {
    match self {
      GraphNode::Class(_) => GraphKind::Class,
      GraphNode::Package(_) => GraphKind::Package,
      GraphNode::Target(_) => GraphKind::Target,
    }
  }
}

impl From<ClassNode> for GraphNode {
  fn from(node: ClassNode) -> Self {
    GraphNode::Class(node)
  }
}

impl From<PackageNode> for GraphNode {
  fn from(node: PackageNode) -> Self {
    GraphNode::Package(node)
  }
}

impl From<TargetNode> for GraphNode {
  fn from(node: TargetNode) -> Self {
    GraphNode::Target(node)
  }
}
