//! Ambient building blocks shared by the loader and the CLI
//!
//! - **config**: depgraph.toml discovery, parsing and validation
//! - **context**: load-once context passed to every command
//! - **error**: error types with contextual help messages and exit codes
//! - **logging**: tracing subscriber setup

pub mod config;
pub mod context;
pub mod error;
pub mod logging;
