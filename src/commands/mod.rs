//! CLI commands for depgraph
//!
//! Every command reads from a `&GraphContext` built once in main.rs:
//!
//! - **summary**: node/edge counts and per-node degrees
//! - **deps**: direct dependencies or dependents of a node
//! - **path**: shortest dependency chain between two nodes
//! - **cycles**: dependency cycles
//! - **export**: JSON or Graphviz DOT rendering of the model

pub mod cycles;
pub mod deps;
pub mod export;
pub mod path;
pub mod summary;

pub use cycles::run_cycles;
pub use deps::run_deps;
pub use export::run_export;
pub use path::run_path;
pub use summary::run_summary;
