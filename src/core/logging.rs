//! Logging setup for the CLI
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! `DEPGRAPH_LOG` takes a full `EnvFilter` directive and overrides `-v`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "DEPGRAPH_LOG";

/// Filter directive for a `-v` count: 0 = warn, 1 = debug, 2+ = trace
pub fn default_directive(verbosity: u8) -> &'static str {
  match verbosity {
    0 => "warn",
    1 => "depgraph=debug,warn",
    _ => "trace",
  }
}

/// Install the global fmt subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbosity: u8) {
  let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}
