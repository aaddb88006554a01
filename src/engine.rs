// src/engine.rs
//! Orchestrates ingestion, graph construction and ranking.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::graph::{self, BuiltGraph, GraphStats, InputPolicy};
use crate::ingest::{self, EdgeRecord};
use crate::rank::{IterationObserver, PageRank, PageRankResult, RankReporter};

/// Everything one ranking run produced.
#[derive(Debug, Clone)]
pub struct RankOutcome {
    pub built: BuiltGraph,
    pub stats: GraphStats,
    pub result: PageRankResult,
    pub reporter: RankReporter,
}

impl RankOutcome {
    #[must_use]
    pub fn converged(&self) -> bool {
        self.result.converged()
    }
}

pub struct GraphEngine;

impl GraphEngine {
    /// Reads `paths`, builds the graph and ranks it.
    ///
    /// # Errors
    /// Returns `InvalidParameter` before touching the input if the config is
    /// bad, then any ingestion or ranking error.
    pub fn rank_files(
        paths: &[PathBuf],
        config: &Config,
        observer: &mut dyn IterationObserver,
    ) -> Result<RankOutcome> {
        config.validate()?;
        let built = ingest::read_files(paths, &config.input)?;
        Self::rank_built(built, config, observer)
    }

    /// Same as [`Self::rank_files`] for records produced in memory.
    ///
    /// # Errors
    /// See [`Self::rank_files`].
    pub fn rank_records<I>(
        records: I,
        config: &Config,
        observer: &mut dyn IterationObserver,
    ) -> Result<RankOutcome>
    where
        I: IntoIterator<Item = Result<EdgeRecord>>,
    {
        config.validate()?;
        let built = graph::build(records, InputPolicy::from_strict(config.input.strict))?;
        Self::rank_built(built, config, observer)
    }

    /// Ranks an already built graph.
    ///
    /// # Errors
    /// Returns `EmptyGraph` or `InvalidParameter` from the engine.
    pub fn rank_built(
        built: BuiltGraph,
        config: &Config,
        observer: &mut dyn IterationObserver,
    ) -> Result<RankOutcome> {
        let stats = GraphStats::of(&built.graph);
        let result = PageRank::from_config(&config.rank).run_observed(&built.graph, observer)?;
        let reporter = RankReporter::new(&result.scores, &built.index)?;
        Ok(RankOutcome {
            built,
            stats,
            result,
            reporter,
        })
    }
}
