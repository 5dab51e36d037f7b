use clap::{Args, Parser, Subcommand};
use depgraph::commands;
use depgraph::core::context::GraphContext;
use depgraph::core::error::{GraphError, print_error};
use depgraph::core::logging::init_logging;
use depgraph::model::GraphKind;
use std::path::PathBuf;

/// Load class/package/target dependency graphs from JSON and query them
#[derive(Parser)]
#[command(name = "depgraph")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Config file (default: depgraph.toml, .depgraph.toml or .config/depgraph.toml)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Increase log verbosity (-v debug, -vv trace)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Commands,
}

/// Graph document selection shared by every command
#[derive(Args)]
struct GraphArgs {
  /// Graph JSON produced by the dependency generator
  graph: PathBuf,

  /// Which graph to load: class, package or target
  #[arg(short, long, default_value = "class")]
  kind: String,
}

#[derive(Subcommand)]
enum Commands {
  /// Show node and edge counts with per-node degrees
  Summary {
    #[command(flatten)]
    input: GraphArgs,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// List direct dependencies of a node
  Deps {
    #[command(flatten)]
    input: GraphArgs,
    /// Node identifier
    node: String,
    /// List dependents (incoming edges) instead
    #[arg(long)]
    reverse: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Show the shortest dependency chain from one node to another
  Path {
    #[command(flatten)]
    input: GraphArgs,
    /// Depending node
    from: String,
    /// Depended-upon node
    to: String,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Report dependency cycles
  Cycles {
    #[command(flatten)]
    input: GraphArgs,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Re-emit the loaded graph
  Export {
    #[command(flatten)]
    input: GraphArgs,
    /// Output format: json (default), dot
    #[arg(long, default_value = "json")]
    format: String,
  },
}

impl Commands {
  fn input(&self) -> &GraphArgs {
    match self {
      Commands::Summary { input, .. }
      | Commands::Deps { input, .. }
      | Commands::Path { input, .. }
      | Commands::Cycles { input, .. }
      | Commands::Export { input, .. } => input,
    }
  }
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let work_dir = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("Error: Failed to get current directory: {}", e);
      std::process::exit(1);
    }
  };

  let input = cli.command.input();
  let kind: GraphKind = match input.kind.parse() {
    Ok(kind) => kind,
    Err(e) => handle_error(e),
  };

  // Load once; every command only reads the model
  let ctx = match GraphContext::build(&input.graph, kind, cli.config.as_deref(), &work_dir) {
    Ok(ctx) => ctx,
    Err(e) => handle_error(e),
  };

  let result = match cli.command {
    Commands::Summary { json, .. } => commands::run_summary(&ctx, json),
    Commands::Deps {
      node, reverse, json, ..
    } => commands::run_deps(&ctx, node, reverse, json),
    Commands::Path { from, to, json, .. } => commands::run_path(&ctx, from, to, json),
    Commands::Cycles { json, .. } => commands::run_cycles(&ctx, json),
    Commands::Export { format, .. } => commands::run_export(&ctx, format),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: GraphError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
