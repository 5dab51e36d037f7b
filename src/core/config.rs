use crate::core::error::{ConfigError, GraphError, GraphResult, ResultExt};
use crate::loader::DuplicatePolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for depgraph
/// Searched in order: depgraph.toml, .depgraph.toml, .config/depgraph.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepGraphConfig {
  #[serde(default)]
  pub loader: LoaderConfig,
  #[serde(default)]
  pub naming: NamingConfig,
}

/// How graph documents are turned into models
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoaderConfig {
  /// What to do when two node records share an id but differ (default: reject)
  #[serde(default)]
  pub duplicate_nodes: DuplicatePolicy,
}

/// Display-name shortening rules
///
/// # Example
///
/// ```toml
/// [naming]
/// package_prefixes = [
///   { prefix = "org.chromium.", replacement = "o.c." },
/// ]
/// target_prefixes = [
///   { prefix = "//chrome/android/", replacement = "//c/a/" },
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
  /// Applied to package names and to the package part of class names
  #[serde(default = "default_package_prefixes")]
  pub package_prefixes: Vec<PrefixRule>,

  /// Applied to build target names
  #[serde(default = "default_target_prefixes")]
  pub target_prefixes: Vec<PrefixRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
  pub prefix: String,
  pub replacement: String,
}

impl PrefixRule {
  pub fn new(prefix: impl Into<String>, replacement: impl Into<String>) -> Self {
    Self {
      prefix: prefix.into(),
      replacement: replacement.into(),
    }
  }
}

fn default_package_prefixes() -> Vec<PrefixRule> {
  vec![
    PrefixRule::new("org.chromium.", "o.c."),
    PrefixRule::new("com.google.android.apps.chrome.", "c.g.a.a.c."),
  ]
}

fn default_target_prefixes() -> Vec<PrefixRule> {
  vec![
    PrefixRule::new("//chrome/android/", "//c/a/"),
    PrefixRule::new("//third_party/android_deps/", "//t/a_d/"),
  ]
}

impl Default for NamingConfig {
  fn default() -> Self {
    Self {
      package_prefixes: default_package_prefixes(),
      target_prefixes: default_target_prefixes(),
    }
  }
}

impl NamingConfig {
  /// Validate naming rules
  pub fn validate(&self) -> GraphResult<()> {
    validate_rules("package_prefixes", &self.package_prefixes)?;
    validate_rules("target_prefixes", &self.target_prefixes)?;
    Ok(())
  }
}

fn validate_rules(field: &str, rules: &[PrefixRule]) -> GraphResult<()> {
  let mut seen = HashSet::new();
  for rule in rules {
    if rule.prefix.is_empty() {
      return Err(GraphError::Config(ConfigError::Invalid {
        reason: format!("[naming] {} contains an empty prefix", field),
      }));
    }
    if !seen.insert(rule.prefix.as_str()) {
      return Err(GraphError::Config(ConfigError::Invalid {
        reason: format!("[naming] {} lists prefix '{}' more than once", field, rule.prefix),
      }));
    }
  }
  Ok(())
}

impl DepGraphConfig {
  /// Find config file in search order: depgraph.toml, .depgraph.toml, .config/depgraph.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("depgraph.toml"),
      path.join(".depgraph.toml"),
      path.join(".config").join("depgraph.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config discovered under `dir`, or defaults when none exists
  pub fn discover(dir: &Path) -> GraphResult<Self> {
    match Self::find_config_path(dir) {
      Some(config_path) => Self::load(&config_path),
      None => Ok(Self::default()),
    }
  }

  /// Load config from an explicit file
  pub fn load(config_path: &Path) -> GraphResult<Self> {
    if !config_path.exists() {
      return Err(GraphError::Config(ConfigError::NotFound {
        path: config_path.to_path_buf(),
      }));
    }

    let content = fs::read_to_string(config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config = Self::parse(&content)?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
  }

  /// Parse and validate config text
  pub fn parse(content: &str) -> GraphResult<Self> {
    let config: DepGraphConfig = toml_edit::de::from_str(content)?;
    config.naming.validate()?;
    Ok(config)
  }
}
