//! Load dependency graphs emitted as JSON (classes, packages, build targets)
//! into an in-memory model and query them.
//!
//! ```no_run
//! use depgraph::core::config::DepGraphConfig;
//! use depgraph::loader::read_graph_file;
//! use depgraph::model::GraphKind;
//! use std::path::Path;
//!
//! let model = read_graph_file(Path::new("graph.json"), GraphKind::Class, &DepGraphConfig::default())?;
//! for edge in model.edges() {
//!   println!("{}", edge.id());
//! }
//! # Ok::<(), depgraph::core::error::GraphError>(())
//! ```

pub mod commands;
pub mod core;
pub mod loader;
pub mod model;
pub mod naming;
