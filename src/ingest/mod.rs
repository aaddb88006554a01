// src/ingest/mod.rs
//! Edge-table ingestion: the boundary between crawler output and the graph.

pub mod reader;

pub use reader::EdgeReader;

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::config::InputConfig;
use crate::error::{RankError, Result};
use crate::graph::{BuiltGraph, GraphBuilder, InputPolicy};

/// One row of an edge table, already oriented as `source -> target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// 1-based line in the input the record came from (0 when built in code).
    pub line: usize,
    pub source: String,
    pub target: String,
}

impl EdgeRecord {
    pub fn new(line: usize, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            line,
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Opens an edge table for streaming.
///
/// # Errors
/// Returns `Io` if the file cannot be opened.
pub fn open(path: &Path, config: &InputConfig) -> Result<EdgeReader<File>> {
    let file = File::open(path).map_err(|e| RankError::io(e, path))?;
    Ok(EdgeReader::new(file, path, config))
}

/// Reads every file in order into a single graph.
///
/// # Errors
/// Returns `Io` on read failure, and `MalformedRecord` for a bad row when
/// `config.strict` is set.
pub fn read_files(paths: &[PathBuf], config: &InputConfig) -> Result<BuiltGraph> {
    let mut builder = GraphBuilder::new(InputPolicy::from_strict(config.strict));
    for path in paths {
        let reader = open(path, config)?;
        builder.ingest_from(path, reader)?;
    }
    Ok(builder.finish())
}
