//! Graph JSON loading
//!
//! - **json**: generic loader with an injected node factory
//! - **kinds**: class/package/target record types and specializations
//! - **document**: reading generator documents from disk

pub mod document;
pub mod json;
pub mod kinds;

pub use document::{read_graph_file, select_graph};
pub use json::{DuplicatePolicy, JsonEdge, JsonGraph, load, load_with_policy};
pub use kinds::{
  ClassMeta, ClassNodeRecord, MemberMeta, MemberNodeRecord, parse_class_graph, parse_graph_value, parse_package_graph,
  parse_target_graph,
};
