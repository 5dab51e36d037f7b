//! `depgraph cycles` - Dependency cycles (strongly connected components)

use crate::core::context::GraphContext;
use crate::core::error::GraphResult;
use serde_json::json;

/// Run the cycles command
pub fn run_cycles(ctx: &GraphContext, json: bool) -> GraphResult<()> {
  let cycles = ctx.model.find_cycles();

  if json {
    let output = json!({
        "cycle_count": cycles.len(),
        "cycles": cycles
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    return Ok(());
  }

  if cycles.is_empty() {
    println!("✅ No dependency cycles");
    return Ok(());
  }

  println!("Found {} dependency cycle(s)", cycles.len());
  for (i, cycle) in cycles.iter().enumerate() {
    println!();
    println!("Cycle {} ({} nodes):", i + 1, cycle.len());
    for id in cycle {
      println!("  🔁 {}", id);
    }
  }

  Ok(())
}
