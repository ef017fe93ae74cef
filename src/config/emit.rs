//! YAML emission of linkspector configuration.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use super::error::ConfigError;
use super::schema::LinkspectorConfig;

/// Conventional file name of a linkspector configuration.
pub const TARGET_CONFIG_FILE: &str = ".linkspector.yml";

/// Encode `config` as block-style YAML in schema key order.
pub fn to_yaml(config: &LinkspectorConfig) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(config)?)
}

/// Write `config` to `output`, or to stdout when no path is given.
pub fn write_output(config: &LinkspectorConfig, output: Option<&Path>) -> Result<(), ConfigError> {
    let yaml = to_yaml(config)?;

    match output {
        Some(path) => {
            fs::write(path, &yaml).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
            info!("Wrote linkspector config to {:?}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(yaml.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| ConfigError::WriteError {
                    path: "<stdout>".into(),
                    source: e,
                })?;
            debug!("Wrote {} bytes of YAML to stdout", yaml.len());
        }
    }

    Ok(())
}
