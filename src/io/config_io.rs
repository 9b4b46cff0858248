use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Optional config file, relative to the working directory
pub const CONFIG_FILE: &str = ".todo.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse .todo.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read the config file at `path`. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}
