//! Error types for depgraph with contextual messages and exit codes
//!
//! Every failure is categorized (load, config, I/O) so the CLI can pick an exit
//! code and print a suggestion next to the message. Load errors are terminal:
//! a failed load never yields a partial graph.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for depgraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, missing files)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// The graph document is not usable
  InvalidInput = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for depgraph
#[derive(Debug)]
pub enum GraphError {
  /// Graph document could not be turned into a model
  Load(LoadError),

  /// Configuration errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl GraphError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    GraphError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error.
  ///
  /// Categorized errors are wrapped into a message so the context line is not lost.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      GraphError::Message { message, context, help } => GraphError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      GraphError::Io(e) => GraphError::Message {
        message: format!("I/O error: {}", e),
        context: Some(ctx_str),
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      GraphError::Load(_) => ExitCode::InvalidInput,
      GraphError::Config(_) => ExitCode::User,
      GraphError::Io(_) => ExitCode::System,
      GraphError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      GraphError::Load(e) => e.help_message(),
      GraphError::Config(e) => e.help_message(),
      GraphError::Message { help, .. } => help.clone(),
      GraphError::Io(_) => None,
    }
  }
}

impl fmt::Display for GraphError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GraphError::Load(e) => write!(f, "{}", e),
      GraphError::Config(e) => write!(f, "{}", e),
      GraphError::Io(e) => write!(f, "I/O error: {}", e),
      GraphError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for GraphError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      GraphError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for GraphError {
  fn from(err: io::Error) -> Self {
    GraphError::Io(err)
  }
}

impl From<LoadError> for GraphError {
  fn from(err: LoadError) -> Self {
    GraphError::Load(err)
  }
}

impl From<ConfigError> for GraphError {
  fn from(err: ConfigError) -> Self {
    GraphError::Config(err)
  }
}

impl From<serde_json::Error> for GraphError {
  fn from(err: serde_json::Error) -> Self {
    GraphError::message(format!("JSON error: {}", err))
  }
}

impl From<toml_edit::de::Error> for GraphError {
  fn from(err: toml_edit::de::Error) -> Self {
    GraphError::Config(ConfigError::Invalid {
      reason: format!("TOML deserialization error: {}", err),
    })
  }
}

/// Which end of an edge record failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEndpoint {
  Begin,
  End,
}

impl fmt::Display for EdgeEndpoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EdgeEndpoint::Begin => write!(f, "begin"),
      EdgeEndpoint::End => write!(f, "end"),
    }
  }
}

/// Errors raised while turning a graph document into a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
  /// A node or edge record is missing fields or has the wrong shape
  MalformedInput { reason: String },

  /// An edge references an identifier that no node record declared
  DanglingEdge {
    edge_index: usize,
    endpoint: EdgeEndpoint,
    id: String,
  },

  /// Two node records share an identifier but describe different nodes
  ConflictingNode { id: String },

  /// The document holds neither the requested graph section nor a bare graph
  MissingSection { kind: String },

  /// A query named a node that is not in the graph
  UnknownNode { id: String },
}

impl LoadError {
  fn help_message(&self) -> Option<String> {
    match self {
      LoadError::DanglingEdge { .. } => {
        Some("Every edge `begin`/`end` must name a node listed under `nodes`. Regenerate the graph JSON.".to_string())
      }
      LoadError::ConflictingNode { .. } => Some(
        "Set `duplicate_nodes = \"keep-first\"` under [loader] in depgraph.toml to keep the first definition."
          .to_string(),
      ),
      LoadError::MissingSection { kind } => Some(format!(
        "Expected a `{}_graph` object or a top-level object with `nodes` and `edges`.",
        kind
      )),
      LoadError::UnknownNode { .. } => Some("Run `depgraph summary <FILE>` to list the node identifiers.".to_string()),
      LoadError::MalformedInput { .. } => None,
    }
  }
}

impl fmt::Display for LoadError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LoadError::MalformedInput { reason } => write!(f, "Malformed graph document: {}", reason),
      LoadError::DanglingEdge { edge_index, endpoint, id } => write!(
        f,
        "Edge #{} references unknown node '{}' as its {}",
        edge_index, id, endpoint
      ),
      LoadError::ConflictingNode { id } => {
        write!(f, "Node '{}' is declared more than once with different metadata", id)
      }
      LoadError::MissingSection { kind } => write!(f, "No {} graph found in document", kind),
      LoadError::UnknownNode { id } => write!(f, "Node '{}' not found in graph", id),
    }
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// Explicitly requested config file does not exist
  NotFound { path: PathBuf },

  /// Config parsed but failed validation
  Invalid { reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Omit --config to search depgraph.toml, .depgraph.toml and .config/depgraph.toml.".to_string())
      }
      ConfigError::Invalid { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => write!(f, "Config file not found: {}", path.display()),
      ConfigError::Invalid { reason } => write!(f, "Invalid configuration: {}", reason),
    }
  }
}

/// Result type alias for depgraph
pub type GraphResult<T> = Result<T, GraphError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> GraphResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> GraphResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<GraphError>,
{
  fn context(self, ctx: impl Into<String>) -> GraphResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> GraphResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &GraphError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
