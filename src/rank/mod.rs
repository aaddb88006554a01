// src/rank/mod.rs
//! Ranking: the `PageRank` engine, its observers, and the top-K reporter.

pub mod observer;
pub mod pagerank;
pub mod report;

pub use observer::{
    IterationObserver, IterationRecord, NoopObserver, ObserverSet, RecordingObserver,
};
pub use pagerank::PageRank;
pub use report::{RankReporter, RankedEntry, DEFAULT_TOP_K};

use serde::Serialize;

use crate::graph::NodeId;

/// One score per node, indexed like the graph.
pub type RankVector = Vec<f64>;

/// How the iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Convergence {
    /// The delta dropped below the tolerance.
    Tolerance,
    /// The iteration cap was hit first; the scores are the last iterate.
    IterationCap,
}

/// Result of a `PageRank` computation.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    pub scores: RankVector,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Delta of the last iteration.
    pub delta: f64,
    pub convergence: Convergence,
}

impl PageRankResult {
    #[must_use]
    pub fn new(
        scores: RankVector,
        iterations: usize,
        delta: f64,
        convergence: Convergence,
    ) -> Self {
        Self {
            scores,
            iterations,
            delta,
            convergence,
        }
    }

    #[must_use]
    pub fn converged(&self) -> bool {
        self.convergence == Convergence::Tolerance
    }

    #[must_use]
    pub fn score(&self, node: NodeId) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }
}
