// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, DeltaNorm, InputConfig, RankConfig, SourceColumn};

use std::path::Path;

use crate::error::{RankError, Result};
use crate::rank::PageRank;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "linkrank.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path` if given, otherwise `linkrank.toml` from the working
    /// directory when it exists, otherwise the defaults.
    ///
    /// # Errors
    /// Returns error if an explicit file is missing or any file fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => io::load_toml(p),
            None if Path::new(CONFIG_FILE).exists() => io::load_toml(Path::new(CONFIG_FILE)),
            None => Ok(Self::new()),
        }
    }

    /// Validates every option before any work starts.
    ///
    /// # Errors
    /// Returns `InvalidParameter` naming the first bad option.
    pub fn validate(&self) -> Result<()> {
        PageRank::from_config(&self.rank).validate()?;
        if self.rank.top_k == 0 {
            return Err(RankError::InvalidParameter {
                name: "top_k",
                value: "0".into(),
                reason: "must be at least 1",
            });
        }
        let d = self.input.delimiter;
        if !d.is_ascii() || matches!(d, '"' | '\n' | '\r') {
            return Err(RankError::InvalidParameter {
                name: "delimiter",
                value: format!("{d:?}"),
                reason: "must be one ASCII character other than a quote or line break",
            });
        }
        Ok(())
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let c = io::parse_toml(Path::new("t.toml"), "[rank]\ndamping_factor = 0.9\n").unwrap();
        assert!((c.rank.damping_factor - 0.9).abs() < f64::EPSILON);
        assert_eq!(c.rank.max_iterations, 100);
        assert_eq!(c.rank.top_k, 100);
        assert_eq!(c.input.delimiter, ',');
        assert!(c.input.has_header);
    }

    #[test]
    fn test_enum_keys() {
        let c = io::parse_toml(
            Path::new("t.toml"),
            "[rank]\nnorm = \"l1\"\n[input]\nsource_column = \"second\"\n",
        )
        .unwrap();
        assert_eq!(c.rank.norm, DeltaNorm::L1);
        assert_eq!(c.input.source_column, SourceColumn::Second);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = io::parse_toml(Path::new("t.toml"), "[rank\n").unwrap_err();
        assert!(matches!(err, RankError::Config { .. }));
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let mut c = Config::new();
        c.rank.top_k = 0;
        assert!(matches!(
            c.validate(),
            Err(RankError::InvalidParameter { name: "top_k", .. })
        ));
    }

    #[test]
    fn test_quote_delimiter_rejected() {
        let mut c = Config::new();
        c.input.delimiter = '"';
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let mut c = Config::new();
        c.input.delimiter = '§';
        assert!(matches!(
            c.validate(),
            Err(RankError::InvalidParameter { name: "delimiter", .. })
        ));
    }
}
