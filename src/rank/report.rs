// src/rank/report.rs
//! Deterministic ordering of a rank vector.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{RankError, Result};
use crate::graph::NodeIndex;

pub const DEFAULT_TOP_K: usize = 100;

/// One line of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// 1-based.
    pub position: usize,
    pub identifier: String,
    pub score: f64,
}

/// Full ranking, highest score first.
///
/// Equal scores are ordered by identifier, so the order never depends on
/// hash iteration.
#[derive(Debug, Clone)]
pub struct RankReporter {
    entries: Vec<RankedEntry>,
}

impl RankReporter {
    /// Sorts `scores`, naming each node through `index`.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if the vector and the index disagree in length.
    pub fn new(scores: &[f64], index: &NodeIndex) -> Result<Self> {
        if scores.len() != index.len() {
            return Err(RankError::InvalidParameter {
                name: "rank_vector",
                value: scores.len().to_string(),
                reason: "length differs from the node count",
            });
        }

        let mut ranked: Vec<(&str, f64)> = index
            .iter()
            .map(|(id, name)| (name, scores[id]))
            .collect();
        ranked.sort_by(|a, b| by_score_then_name(*a, *b));

        let entries = ranked
            .into_iter()
            .enumerate()
            .map(|(i, (name, score))| RankedEntry {
                position: i + 1,
                identifier: name.to_string(),
                score,
            })
            .collect();
        Ok(Self { entries })
    }

    /// First `k` entries, or all of them when there are fewer.
    #[must_use]
    pub fn top(&self, k: usize) -> &[RankedEntry] {
        &self.entries[..k.min(self.entries.len())]
    }

    #[must_use]
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn by_score_then_name(a: (&str, f64), b: (&str, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
