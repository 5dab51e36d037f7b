//! Display-name shortening
//!
//! Fully-qualified Java and GN names are long; graph views label nodes with an
//! abbreviated form. Each rule replaces a leading prefix, and when several
//! rules match, the longest prefix wins.

use crate::core::config::{NamingConfig, PrefixRule};

/// Pure string shortener built from configured prefix rules.
#[derive(Debug, Clone)]
pub struct NameShortener {
  package_rules: Vec<PrefixRule>,
  target_rules: Vec<PrefixRule>,
}

impl Default for NameShortener {
  fn default() -> Self {
    Self::from_config(&NamingConfig::default())
  }
}

impl NameShortener {
  pub fn from_config(config: &NamingConfig) -> Self {
    Self {
      package_rules: sorted_longest_first(&config.package_prefixes),
      target_rules: sorted_longest_first(&config.target_prefixes),
    }
  }

  /// `org.chromium.base` → `o.c.base`
  pub fn shorten_package_name(&self, name: &str) -> String {
    replace_prefix(&self.package_rules, name)
  }

  /// `org.chromium.base.Log` → `o.c.base.Log`
  ///
  /// Only the package part is rewritten; the simple class name is kept as is.
  pub fn shorten_class_name(&self, name: &str) -> String {
    match name.rsplit_once('.') {
      Some((package, class)) => format!("{}.{}", self.shorten_package_name(package), class),
      None => name.to_string(),
    }
  }

  /// `//chrome/android:chrome_java` → `//c/a:chrome_java` style rewrites
  pub fn shorten_target_name(&self, name: &str) -> String {
    replace_prefix(&self.target_rules, name)
  }
}

fn sorted_longest_first(rules: &[PrefixRule]) -> Vec<PrefixRule> {
  let mut rules = rules.to_vec();
  rules.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
  rules
}

fn replace_prefix(rules: &[PrefixRule], name: &str) -> String {
  for rule in rules {
    if let Some(rest) = name.strip_prefix(rule.prefix.as_str()) {
      return format!("{}{}", rule.replacement, rest);
    }
  }
  name.to_string()
}
