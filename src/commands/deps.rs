//! `depgraph deps` - Direct dependencies or dependents of one node

use crate::core::context::GraphContext;
use crate::core::error::GraphResult;
use serde_json::json;

/// Run the deps command
pub fn run_deps(ctx: &GraphContext, node: String, reverse: bool, json: bool) -> GraphResult<()> {
  let neighbors = if reverse {
    ctx.model.inbound(&node)?
  } else {
    ctx.model.outbound(&node)?
  };
  let relation = if reverse { "dependents" } else { "dependencies" };

  if json {
    let ids: Vec<&str> = neighbors.iter().map(|n| n.id()).collect();
    let output = json!({
        "node": node,
        "relation": relation,
        "nodes": ids
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    return Ok(());
  }

  println!("Direct {} of {}: {}", relation, node, neighbors.len());
  let marker = if reverse { "⬆ " } else { "⬇ " };
  for neighbor in neighbors {
    println!("  {} {}", marker, neighbor.id());
  }

  Ok(())
}
