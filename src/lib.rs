//! mlc-migrate: markdown-link-check to linkspector configuration migration
//!
//! This crate converts an `mlc_config.json` file into an equivalent
//! `.linkspector.yml` file and explains everything it could not carry over.
//!
//! # Architecture
//!
//! - **Config**: Source loading (JSON), target schema, YAML emission
//! - **Translate**: Pure field mapping that collects warnings instead of failing
//! - **Report**: Banner-framed warning output for the terminal
//! - **CLI**: Argument definitions for the `mlc-migrate` binary
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use mlc_migrate::{config, translate};
//!
//! let source = config::SourceLoader::new().load(Path::new("mlc_config.json"))?;
//! let (linkspector, warnings) = translate::translate(&source);
//! for warning in &warnings {
//!     eprintln!("- {warning}");
//! }
//! print!("{}", config::to_yaml(&linkspector)?);
//! # Ok::<(), mlc_migrate::config::ConfigError>(())
//! ```

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod report;
pub mod translate;
