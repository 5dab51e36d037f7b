//! `depgraph summary` - Overview of a loaded graph
//!
//! Prints node/edge counts and every node with its in/out degree, in document order.

use crate::core::context::GraphContext;
use crate::core::error::GraphResult;
use serde_json::json;

/// Run the summary command
pub fn run_summary(ctx: &GraphContext, json: bool) -> GraphResult<()> {
  let model = &ctx.model;

  let mut rows = Vec::with_capacity(model.node_count());
  for node in model.nodes() {
    rows.push((node, model.in_degree(node.id())?, model.out_degree(node.id())?));
  }

  if json {
    let nodes: Vec<_> = rows
      .iter()
      .map(|(node, inbound, outbound)| {
        json!({
            "id": node.id(),
            "short_name": node.short_name(),
            "inbound": inbound,
            "outbound": outbound
        })
      })
      .collect();

    let output = json!({
        "file": ctx.path.display().to_string(),
        "kind": ctx.kind,
        "summary": {
            "node_count": model.node_count(),
            "edge_count": model.edge_count()
        },
        "nodes": nodes
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    return Ok(());
  }

  println!("Graph Summary ({})", ctx.kind);
  println!("=================");
  println!();
  println!("File:  {}", ctx.path.display());
  println!("Nodes: {}", model.node_count());
  println!("Edges: {}", model.edge_count());

  if !rows.is_empty() {
    println!();
    println!("{:>5} {:>5}  node", "in", "out");
    for (node, inbound, outbound) in &rows {
      if node.short_name() == node.id() {
        println!("{:>5} {:>5}  {}", inbound, outbound, node.id());
      } else {
        println!("{:>5} {:>5}  {} ({})", inbound, outbound, node.id(), node.short_name());
      }
    }
  }

  Ok(())
}
