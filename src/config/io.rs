// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::Config;
use crate::error::{RankError, Result};

/// Reads and parses a `linkrank.toml` file.
///
/// # Errors
/// Returns `Io` if the file cannot be read and `Config` if it is not valid TOML
/// for this schema.
pub fn load_toml(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| RankError::io(e, path))?;
    parse_toml(path, &content)
}

/// Parses config text; `path` is only used in error messages.
///
/// # Errors
/// Returns `Config` on a parse or schema error.
pub fn parse_toml(path: &Path, content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| RankError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Writes the config as TOML.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config).map_err(|e| RankError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    fs::write(path, content).map_err(|e| RankError::io(e, path))
}
