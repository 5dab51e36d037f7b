//! `depgraph path` - Why does one node depend on another?

use crate::core::context::GraphContext;
use crate::core::error::GraphResult;
use serde_json::json;

/// Run the path command
pub fn run_path(ctx: &GraphContext, from: String, to: String, json: bool) -> GraphResult<()> {
  let path = ctx.model.shortest_path(&from, &to)?;

  if json {
    let output = json!({
        "from": from,
        "to": to,
        "path": path
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    return Ok(());
  }

  match path {
    Some(chain) => {
      println!("{} depends on {} ({} hops):", from, to, chain.len() - 1);
      println!("  {}", chain.join(" → "));
    }
    None => println!("{} does not depend on {}", from, to),
  }

  Ok(())
}
