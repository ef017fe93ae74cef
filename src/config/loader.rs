//! Loading of markdown-link-check configuration files.
//!
//! The source file is decoded into an untyped JSON object. Fields are not
//! validated here: the translator inspects each one and turns anything it
//! can't use into a warning. Only a missing file, invalid JSON, or a
//! top-level value that isn't an object stop the migration.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use super::error::ConfigError;

/// Conventional file name of a markdown-link-check configuration.
pub const SOURCE_CONFIG_FILE: &str = "mlc_config.json";

/// Loader for markdown-link-check JSON configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceLoader;

impl SourceLoader {
    /// Create a new loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Read and decode the configuration at `path`.
    pub fn load(&self, path: &Path) -> Result<Map<String, Value>, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        debug!("Read {} bytes from {:?}", contents.len(), path);
        self.parse(&contents, path)
    }

    /// Decode configuration text; `path` is only used in errors.
    pub fn parse(&self, contents: &str, path: &Path) -> Result<Map<String, Value>, ConfigError> {
        let value: Value = serde_json::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        match value {
            Value::Object(map) => {
                debug!("Decoded source config with {} top-level keys", map.len());
                Ok(map)
            }
            other => Err(ConfigError::NotAnObject {
                path: path.to_path_buf(),
                found: kind_of(&other),
            }),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SOURCE_CONFIG_FILE);
        fs::write(&path, r#"{"aliveStatusCodes": [200, 206]}"#).unwrap();

        let source = SourceLoader::new().load(&path).unwrap();

        assert_eq!(source["aliveStatusCodes"], json!([200, 206]));
    }

    #[test]
    fn test_missing_file_returns_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent.json");

        let err = SourceLoader::new().load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("nonexistent.json"));
    }

    #[test]
    fn test_invalid_json_returns_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ this is not json").unwrap();

        let err = SourceLoader::new().load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().starts_with("Could not decode JSON from"));
    }

    #[test]
    fn test_top_level_array_is_rejected() {
        let err = SourceLoader::new()
            .parse("[1, 2, 3]", Path::new("list.json"))
            .unwrap_err();

        match err {
            ConfigError::NotAnObject { found, .. } => assert_eq!(found, "an array"),
            other => panic!("Expected NotAnObject, got {other:?}"),
        }
    }

    #[test]
    fn test_key_order_is_preserved() {
        let source = SourceLoader::new()
            .parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#, Path::new("order.json"))
            .unwrap();

        let keys: Vec<&str> = source.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
