//! `depgraph export` - Re-emit the loaded model for a viewer

use crate::core::context::GraphContext;
use crate::core::error::{GraphError, GraphResult};

/// Output format for export command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
  Json,
  Dot,
}

impl ExportFormat {
  fn from_str(s: &str) -> GraphResult<Self> {
    match s.to_lowercase().as_str() {
      "json" => Ok(Self::Json),
      "dot" | "graphviz" => Ok(Self::Dot),
      _ => Err(GraphError::message(format!(
        "Unknown format '{}'. Valid formats: json, dot",
        s
      ))),
    }
  }
}

/// Run the export command
pub fn run_export(ctx: &GraphContext, format: String) -> GraphResult<()> {
  match ExportFormat::from_str(&format)? {
    ExportFormat::Json => println!("{}", serde_json::to_string_pretty(&ctx.model.to_json())?),
    ExportFormat::Dot => print!("{}", ctx.model.to_dot()),
  }
  Ok(())
}
