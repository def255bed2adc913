//! Configuration types for tokenlint.
//!
//! Configuration is static for the lifetime of an analysis: it is loaded
//! before the first stream is inspected and never mutated by rules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for tokenlint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for a failing exit code (default: "error").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to search for token streams (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: Vec::new(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// Gets an integer option with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.options
            .get(key)
            .and_then(toml::Value::as_integer)
            .unwrap_or(default)
    }

    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }

    /// Gets a string array option.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Option<Vec<String>> {
        self.options.get(key).and_then(|v| v.as_array()).map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_all_rules() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert!(config.is_rule_enabled("max-nesting-level"));
    }

    #[test]
    fn parse_config_with_rule_options() {
        let toml = r#"
[analyzer]
root = "./build/tokens"
exclude = ["**/vendor/**"]

[rules.max-nesting-level]
enabled = true
severity = "warning"
max_nesting_level = 4

[rules.element-name-min-length]
min_length = 4
allowed_short_names = ["id", "ok"]
"#;

        let config = Config::parse(toml).expect("config should parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./build/tokens"));
        assert!(config.is_rule_enabled("max-nesting-level"));
        assert_eq!(
            config.rule_severity("max-nesting-level"),
            Some(crate::Severity::Warning)
        );

        let nesting = config.rules.get("max-nesting-level").expect("rule config");
        assert_eq!(nesting.get_int("max_nesting_level", 2), 4);

        let names = config
            .rules
            .get("element-name-min-length")
            .expect("rule config");
        assert_eq!(names.get_int("min_length", 3), 4);
        assert_eq!(
            names.get_str_array("allowed_short_names"),
            Some(vec!["id".to_string(), "ok".to_string()])
        );
    }

    #[test]
    fn disabled_rule_reported_as_disabled() {
        let config = Config::parse(
            r"
[rules.forbidden-public-property]
enabled = false
",
        )
        .expect("config should parse");
        assert!(!config.is_rule_enabled("forbidden-public-property"));
        assert!(config.is_rule_enabled("some-other-rule"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::parse("not [valid").expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_option_falls_back_to_default() {
        let rule = RuleConfig::default();
        assert_eq!(rule.get_int("min_length", 3), 3);
        assert_eq!(rule.get_str("exempt_class_suffix", "Sniff"), "Sniff");
        assert!(rule.get_str_array("allowed_short_names").is_none());
        assert!(rule.get_bool("anything", true));
    }
}
