//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors at the file boundary of a migration: reading the source and
/// writing the result.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The source configuration file does not exist.
    #[error("Input file '{}' not found", .path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Failed to read the source configuration file.
    #[error("Failed to read input file '{}': {source}", .path.display())]
    ReadError {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The source configuration is not valid JSON.
    #[error("Could not decode JSON from '{}'. Details: {source}", .path.display())]
    ParseError {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying JSON parse error.
        source: serde_json::Error,
    },

    /// The source configuration is valid JSON but not an object.
    #[error("Expected a JSON object at the top level of '{}', found {found}", .path.display())]
    NotAnObject {
        /// Path to the offending file.
        path: PathBuf,
        /// Kind of JSON value found instead.
        found: &'static str,
    },

    /// Failed to write the converted configuration.
    #[error("Failed to write output file '{}': {source}", .path.display())]
    WriteError {
        /// Destination path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to encode the converted configuration as YAML.
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] serde_yaml::Error),
}
