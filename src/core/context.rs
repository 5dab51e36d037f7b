//! Load-once context shared by every command
//!
//! main.rs builds the context (config + loaded model) once, then passes it by
//! reference to the selected command.

use crate::core::config::DepGraphConfig;
use crate::core::error::GraphResult;
use crate::loader::read_graph_file;
use crate::model::{GraphKind, GraphModel};
use std::path::{Path, PathBuf};
use tracing::info;

/// A loaded graph plus the settings it was loaded with.
#[derive(Debug)]
pub struct GraphContext {
  /// Graph document on disk
  pub path: PathBuf,

  /// Which graph of the document was loaded
  pub kind: GraphKind,

  /// Effective configuration (discovered, explicit, or defaults)
  pub config: DepGraphConfig,

  /// The loaded model
  pub model: GraphModel,
}

impl GraphContext {
  /// Resolve configuration and load the graph.
  ///
  /// `config_path` wins over discovery in `work_dir`.
  pub fn build(graph_path: &Path, kind: GraphKind, config_path: Option<&Path>, work_dir: &Path) -> GraphResult<Self> {
    let config = match config_path {
      Some(path) => DepGraphConfig::load(path)?,
      None => DepGraphConfig::discover(work_dir)?,
    };

    let model = read_graph_file(graph_path, kind, &config)?;
    info!(
      path = %graph_path.display(),
      kind = %kind,
      nodes = model.node_count(),
      edges = model.edge_count(),
      "graph loaded"
    );

    Ok(Self {
      path: graph_path.to_path_buf(),
      kind,
      config,
      model,
    })
  }
}
