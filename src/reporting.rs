//! Console and file output for graphs and rankings.

pub mod console;
pub mod format;

pub use console::ConsoleObserver;
pub use format::{render, OutputFormat};

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::graph::{BuildSummary, GraphStats};

/// Payload of `stats --json`: graph statistics plus the build counters.
#[derive(Debug, Serialize)]
pub struct StatsReport<'a> {
    #[serde(flatten)]
    pub stats: &'a GraphStats,
    pub records_read: usize,
    pub skipped: usize,
}

impl<'a> StatsReport<'a> {
    #[must_use]
    pub fn new(stats: &'a GraphStats, summary: &BuildSummary) -> Self {
        Self {
            stats,
            records_read: summary.records_read,
            skipped: summary.skipped_count(),
        }
    }
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}

/// Writes rendered output to `path`.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}
