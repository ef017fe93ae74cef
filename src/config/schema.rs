//! Linkspector configuration schema.
//!
//! This module defines the structure of the `.linkspector.yml` file produced
//! by the migration. Field order in [`LinkspectorConfig`] is the key order of
//! the emitted YAML, and absent optional fields are not written at all.
//!
//! Values copied verbatim from the markdown-link-check source (status codes,
//! patterns, URL lists, header maps) are kept as [`serde_json::Value`] so they
//! are emitted exactly as they were read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Directory checked when the source names none.
pub const DEFAULT_DIR: &str = ".";

/// Top-level linkspector configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkspectorConfig {
    /// HTTP status codes treated as alive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alive_status_codes: Option<Value>,

    /// URL patterns excluded from checking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_patterns: Option<Vec<IgnorePattern>>,

    /// URL rewrite rules applied before checking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_patterns: Option<Vec<ReplacementPattern>>,

    /// Custom headers sent for groups of URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_headers: Option<Vec<HttpHeaderGroup>>,

    /// Directories to scan for markdown files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dirs: Option<Vec<Value>>,

    /// Individual files to check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<Value>>,

    /// Whether `.gitignore` entries are skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_git_ignore: Option<bool>,
}

impl LinkspectorConfig {
    /// True once either `dirs` or `files` names something to check.
    pub fn has_targets(&self) -> bool {
        self.dirs.is_some() || self.files.is_some()
    }

    /// The `dirs: ["."]` default.
    pub fn default_dirs() -> Vec<Value> {
        vec![Value::String(DEFAULT_DIR.to_string())]
    }
}

/// A single `ignorePatterns` entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IgnorePattern {
    /// Regular expression matched against link URLs.
    pub pattern: Value,
}

/// A single `replacementPatterns` entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReplacementPattern {
    /// Regular expression matched against link URLs.
    pub pattern: Value,
    /// Replacement text for the matched part.
    pub replacement: Value,
}

/// A single `httpHeaders` entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HttpHeaderGroup {
    /// URL prefixes the headers apply to.
    pub url: Vec<Value>,
    /// Header name to value.
    pub headers: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_is_empty() {
        let config = LinkspectorConfig::default();
        assert!(!config.has_targets());
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({}));
    }

    #[test]
    fn test_fields_use_camel_case_keys() {
        let config = LinkspectorConfig {
            alive_status_codes: Some(json!([200, 206])),
            use_git_ignore: Some(true),
            ..Default::default()
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value, json!({"aliveStatusCodes": [200, 206], "useGitIgnore": true}));
    }

    #[test]
    fn test_files_counts_as_target() {
        let config = LinkspectorConfig {
            files: Some(vec![json!("README.md")]),
            ..Default::default()
        };
        assert!(config.has_targets());
    }

    #[test]
    fn test_parses_linkspector_yaml() {
        let yaml = r#"
dirs:
  - docs
ignorePatterns:
  - pattern: "^http://localhost"
httpHeaders:
  - url:
      - https://api.example.com
    headers:
      Authorization: Bearer ${TOKEN}
useGitIgnore: false
"#;
        let config: LinkspectorConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.dirs, Some(vec![json!("docs")]));
        assert_eq!(config.use_git_ignore, Some(false));
        let groups = config.http_headers.unwrap();
        assert_eq!(groups[0].url, vec![json!("https://api.example.com")]);
        assert_eq!(groups[0].headers["Authorization"], json!("Bearer ${TOKEN}"));
    }
}
