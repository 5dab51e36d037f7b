//! In-memory dependency graph model
//!
//! Built on petgraph; we own the node types and the identifier index.

pub mod graph_model;
pub mod node;

pub use graph_model::{Edge, GraphModel, NodeHandle, NodeInsert};
pub use node::{ClassNode, GraphKind, GraphNode, PackageNode, TargetNode};
