// src/graph/builder.rs
//! Graph construction from edge records.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::index::NodeIndex;
use super::model::Graph;
use super::NodeId;
use crate::error::{RankError, Result};
use crate::ingest::EdgeRecord;

/// What to do with a malformed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Skip it and count it in the [`BuildSummary`].
    #[default]
    Lenient,
    /// Abort the build with the error.
    Strict,
}

impl InputPolicy {
    #[must_use]
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// A record dropped under the lenient policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// File the record came from, if it was read from one.
    pub origin: Option<PathBuf>,
    pub line: usize,
    pub reason: String,
}

/// Counters collected while building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Records seen, malformed ones included.
    pub records_read: usize,
    /// Records that added a new edge.
    pub edges_added: usize,
    /// Well-formed records repeating an edge already present.
    pub duplicate_edges: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl BuildSummary {
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Output of a build: the graph, its identifier map, and the counters.
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    pub graph: Graph,
    pub index: NodeIndex,
    pub summary: BuildSummary,
}

/// Accumulates edges, then freezes them into a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    policy: InputPolicy,
    index: NodeIndex,
    out_adjacency: Vec<Vec<NodeId>>,
    in_adjacency: Vec<Vec<NodeId>>,
    seen_edges: HashSet<(NodeId, NodeId)>,
    summary: BuildSummary,
}

impl GraphBuilder {
    #[must_use]
    pub fn new(policy: InputPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn summary(&self) -> &BuildSummary {
        &self.summary
    }

    /// Registers an identifier without any edge. Edge ingestion never does
    /// this on its own; it exists for callers that know their page set.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for an empty identifier.
    pub fn add_node(&mut self, name: &str) -> Result<NodeId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RankError::InvalidParameter {
                name: "identifier",
                value: String::new(),
                reason: "must not be empty",
            });
        }
        Ok(self.node(name))
    }

    /// Adds one record. Returns `true` if it introduced a new edge.
    ///
    /// A malformed record creates no nodes, even if one side is valid.
    ///
    /// # Errors
    /// Returns `MalformedRecord` when either identifier is empty.
    pub fn add_record(&mut self, record: &EdgeRecord) -> Result<bool> {
        let source = record.source.trim();
        let target = record.target.trim();
        let missing = match (source.is_empty(), target.is_empty()) {
            (false, false) => None,
            (true, false) => Some("empty source identifier"),
            (false, true) => Some("empty target identifier"),
            (true, true) => Some("empty source and target identifiers"),
        };
        if let Some(reason) = missing {
            return Err(RankError::MalformedRecord {
                line: record.line,
                reason: reason.to_string(),
            });
        }

        let s = self.node(source);
        let t = self.node(target);
        Ok(self.link(s, t))
    }

    /// Convenience for code-built graphs.
    ///
    /// # Errors
    /// Returns `MalformedRecord` when either identifier is empty.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<bool> {
        self.add_record(&EdgeRecord::new(0, source, target))
    }

    /// Feeds a record stream through the builder, applying the policy.
    ///
    /// # Errors
    /// Propagates non-record errors (I/O) always, and `MalformedRecord` under
    /// the strict policy.
    pub fn ingest<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<EdgeRecord>>,
    {
        self.ingest_with_origin(None, records)
    }

    /// Like [`Self::ingest`], remembering `origin` for skipped records.
    ///
    /// # Errors
    /// See [`Self::ingest`].
    pub fn ingest_from<I>(&mut self, origin: &Path, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<EdgeRecord>>,
    {
        self.ingest_with_origin(Some(origin), records)
    }

    fn ingest_with_origin<I>(&mut self, origin: Option<&Path>, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<EdgeRecord>>,
    {
        for item in records {
            if matches!(item, Ok(_) | Err(RankError::MalformedRecord { .. })) {
                self.summary.records_read += 1;
            }
            let outcome = item.and_then(|record| self.add_record(&record));
            match outcome {
                Ok(true) => self.summary.edges_added += 1,
                Ok(false) => self.summary.duplicate_edges += 1,
                Err(RankError::MalformedRecord { line, reason })
                    if self.policy == InputPolicy::Lenient =>
                {
                    self.skip(origin, line, reason);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Freezes the builder.
    #[must_use]
    pub fn finish(self) -> BuiltGraph {
        let edge_count = self.seen_edges.len();
        BuiltGraph {
            graph: Graph::from_parts(self.out_adjacency, self.in_adjacency, edge_count),
            index: self.index,
            summary: self.summary,
        }
    }

    fn skip(&mut self, origin: Option<&Path>, line: usize, reason: String) {
        self.summary.skipped.push(SkippedRecord {
            origin: origin.map(Path::to_path_buf),
            line,
            reason,
        });
    }

    fn node(&mut self, name: &str) -> NodeId {
        let id = self.index.get_or_insert(name);
        if id == self.out_adjacency.len() {
            self.out_adjacency.push(Vec::new());
            self.in_adjacency.push(Vec::new());
        }
        id
    }

    fn link(&mut self, source: NodeId, target: NodeId) -> bool {
        if !self.seen_edges.insert((source, target)) {
            return false;
        }
        self.out_adjacency[source].push(target);
        self.in_adjacency[target].push(source);
        true
    }
}

/// Builds a graph from a record stream in one call.
///
/// # Errors
/// See [`GraphBuilder::ingest`].
pub fn build<I>(records: I, policy: InputPolicy) -> Result<BuiltGraph>
where
    I: IntoIterator<Item = Result<EdgeRecord>>,
{
    let mut builder = GraphBuilder::new(policy);
    builder.ingest(records)?;
    Ok(builder.finish())
}
