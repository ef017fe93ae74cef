//! Configuration files on both sides of a migration.
//!
//! - **Source**: markdown-link-check `mlc_config.json`, loaded as an untyped
//!   JSON object by [`SourceLoader`]
//! - **Target**: linkspector `.linkspector.yml`, described by
//!   [`LinkspectorConfig`] and written by [`write_output`]
//!
//! # Output Format
//!
//! The target is emitted as block-style YAML with keys in schema order:
//!
//! ```yaml
//! aliveStatusCodes:
//! - 200
//! ignorePatterns:
//! - pattern: ^http://localhost
//! dirs:
//! - .
//! useGitIgnore: true
//! ```

mod emit;
mod error;
mod loader;
mod schema;

pub use emit::{TARGET_CONFIG_FILE, to_yaml, write_output};
pub use error::ConfigError;
pub use loader::{SOURCE_CONFIG_FILE, SourceLoader};
pub use schema::{
    DEFAULT_DIR, HttpHeaderGroup, IgnorePattern, LinkspectorConfig, ReplacementPattern,
};
