use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Norm used to measure the change between two successive rank vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeltaNorm {
    /// Largest per-node change (L∞).
    #[default]
    Max,
    /// Sum of per-node changes.
    L1,
}

/// Which column of an edge table holds the page the link starts from.
///
/// Outlink tables (`page,outlink`) use `First`; inlink tables
/// (`page,inlink`) use `Second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceColumn {
    #[default]
    First,
    Second,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_damping")]
    pub damping_factor: f64,
    #[serde(default = "default_tolerance")]
    pub convergence_tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default)]
    pub norm: DeltaNorm,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: default_damping(),
            convergence_tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            top_k: default_top_k(),
            norm: DeltaNorm::default(),
            parallel: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Abort on the first malformed record instead of skipping it.
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub source_column: SourceColumn,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_true")]
    pub has_header: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            strict: false,
            source_column: SourceColumn::default(),
            delimiter: default_delimiter(),
            has_header: true,
        }
    }
}

const fn default_damping() -> f64 { 0.85 }
const fn default_tolerance() -> f64 { 1e-6 }
const fn default_max_iterations() -> usize { 100 }
const fn default_top_k() -> usize { 100 }
const fn default_delimiter() -> char { ',' }
const fn default_true() -> bool { true }

/// Contents of `linkrank.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub input: InputConfig,
}
