// src/rank/pagerank.rs
//! `PageRank` power iteration with dangling-mass redistribution.

use rayon::prelude::*;

use super::observer::{IterationObserver, IterationRecord, NoopObserver};
use super::{Convergence, PageRankResult};
use crate::config::{DeltaNorm, RankConfig};
use crate::error::{RankError, Result};
use crate::graph::{Graph, NodeId};

/// Damped `PageRank` over a [`Graph`].
///
/// Each step computes, for every node `j`,
///
/// ```text
/// next[j] = (1 - d) / N + d * (Σ_{i -> j} rank[i] / out(i) + dangling / N)
/// ```
///
/// where `dangling` is the rank held by nodes without outlinks. Spreading that
/// mass evenly keeps the vector summing to 1 at every step.
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Probability of following a link rather than teleporting.
    pub damping: f64,
    /// Iteration stops once the delta drops below this.
    pub tolerance: f64,
    pub max_iterations: usize,
    pub norm: DeltaNorm,
    /// Compute each step with a rayon parallel map over nodes.
    pub parallel: bool,
}

impl Default for PageRank {
    fn default() -> Self {
        Self::from_config(&RankConfig::default())
    }
}

impl PageRank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            damping: config.damping_factor,
            tolerance: config.convergence_tolerance,
            max_iterations: config.max_iterations,
            norm: config.norm,
            parallel: config.parallel,
        }
    }

    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_norm(mut self, norm: DeltaNorm) -> Self {
        self.norm = norm;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks the parameters.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if damping is outside `(0, 1)`, the
    /// tolerance is not a positive finite number, or the cap is zero.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(RankError::InvalidParameter {
                name: "damping_factor",
                value: self.damping.to_string(),
                reason: "must lie strictly between 0 and 1",
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RankError::InvalidParameter {
                name: "convergence_tolerance",
                value: self.tolerance.to_string(),
                reason: "must be a positive finite number",
            });
        }
        if self.max_iterations == 0 {
            return Err(RankError::InvalidParameter {
                name: "max_iterations",
                value: "0".into(),
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Runs to convergence or the iteration cap.
    ///
    /// # Errors
    /// Returns `InvalidParameter` before iterating if the parameters are bad,
    /// and `EmptyGraph` if there is nothing to rank.
    pub fn run(&self, graph: &Graph) -> Result<PageRankResult> {
        self.run_observed(graph, &mut NoopObserver)
    }

    /// Like [`Self::run`], reporting every iteration to `observer`.
    ///
    /// # Errors
    /// See [`Self::run`].
    #[allow(clippy::cast_precision_loss)]
    pub fn run_observed(
        &self,
        graph: &Graph,
        observer: &mut dyn IterationObserver,
    ) -> Result<PageRankResult> {
        self.validate()?;
        let n = graph.node_count();
        if n == 0 {
            return Err(RankError::EmptyGraph);
        }

        let nf = n as f64;
        let dangling = graph.dangling_nodes();
        let mut ranks = vec![1.0 / nf; n];
        let mut next = vec![0.0; n];
        let mut shares = vec![0.0; n];
        let mut delta = f64::INFINITY;

        for iteration in 1..=self.max_iterations {
            let dangling_mass: f64 = dangling.iter().map(|&i| ranks[i]).sum();
            compute_shares(graph, &ranks, &mut shares);

            let step = Step {
                graph,
                shares: &shares,
                base: (1.0 - self.damping) / nf + self.damping * dangling_mass / nf,
                damping: self.damping,
            };
            if self.parallel {
                next.par_iter_mut()
                    .enumerate()
                    .for_each(|(j, slot)| *slot = step.rank_of(j));
            } else {
                for (j, slot) in next.iter_mut().enumerate() {
                    *slot = step.rank_of(j);
                }
            }

            delta = measure_delta(self.norm, &ranks, &next);
            std::mem::swap(&mut ranks, &mut next);

            observer.on_iteration(&IterationRecord {
                iteration,
                delta,
                rank_sum: ranks.iter().sum(),
                dangling_mass,
            });

            if delta < self.tolerance {
                return Ok(PageRankResult::new(
                    ranks,
                    iteration,
                    delta,
                    Convergence::Tolerance,
                ));
            }
        }

        Ok(PageRankResult::new(
            ranks,
            self.max_iterations,
            delta,
            Convergence::IterationCap,
        ))
    }
}

/// Read-only inputs of one step, shared by the sequential and parallel paths.
struct Step<'a> {
    graph: &'a Graph,
    shares: &'a [f64],
    /// Teleport term plus the evenly spread dangling mass, already damped.
    base: f64,
    damping: f64,
}

impl Step<'_> {
    fn rank_of(&self, node: NodeId) -> f64 {
        let inlink_sum: f64 = self
            .graph
            .in_neighbors(node)
            .iter()
            .map(|&i| self.shares[i])
            .sum();
        self.base + self.damping * inlink_sum
    }
}

/// `shares[i] = rank[i] / out(i)`; dangling nodes pass nothing along links.
#[allow(clippy::cast_precision_loss)]
fn compute_shares(graph: &Graph, ranks: &[f64], shares: &mut [f64]) {
    for (i, share) in shares.iter_mut().enumerate() {
        let degree = graph.out_degree(i);
        *share = if degree == 0 {
            0.0
        } else {
            ranks[i] / degree as f64
        };
    }
}

fn measure_delta(norm: DeltaNorm, old: &[f64], new: &[f64]) -> f64 {
    let diffs = old.iter().zip(new).map(|(a, b)| (a - b).abs());
    match norm {
        DeltaNorm::Max => diffs.fold(0.0, f64::max),
        DeltaNorm::L1 => diffs.sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, InputPolicy};
    use crate::rank::observer::RecordingObserver;

    fn graph(edges: &[(&str, &str)]) -> Graph {
        let mut b = GraphBuilder::new(InputPolicy::Strict);
        for (s, t) in edges {
            b.add_edge(s, t).unwrap();
        }
        b.finish().graph
    }

    #[test]
    fn test_cycle_is_uniform() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let result = PageRank::new().run(&g).unwrap();
        assert!(result.converged());
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_isolated_node() {
        let mut b = GraphBuilder::new(InputPolicy::Strict);
        b.add_node("only").unwrap();
        let g = b.finish().graph;
        let result = PageRank::new().run(&g).unwrap();
        assert_eq!(result.scores, vec![1.0]);
        assert_eq!(result.iterations, 1);
        assert!(result.converged());
    }

    #[test]
    fn test_dangling_mass_is_kept() {
        let g = graph(&[("a", "b")]);
        let mut obs = RecordingObserver::new();
        let result = PageRank::new().run_observed(&g, &mut obs).unwrap();
        for r in &obs.records {
            assert!((r.rank_sum - 1.0).abs() < 1e-9, "iteration {}", r.iteration);
        }
        assert!((result.scores[0] + result.scores[1] - 1.0).abs() < 1e-9);
        assert!(result.scores[1] > result.scores[0]);
    }

    #[test]
    fn test_cap_is_flagged() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("a", "c")]);
        let result = PageRank::new()
            .with_max_iterations(2)
            .with_tolerance(1e-300)
            .run(&g)
            .unwrap();
        assert_eq!(result.iterations, 2);
        assert_eq!(result.convergence, Convergence::IterationCap);
        assert!(!result.converged());
    }

    #[test]
    fn test_empty_graph_errors() {
        let err = PageRank::new().run(&Graph::default()).unwrap_err();
        assert!(matches!(err, RankError::EmptyGraph));
    }

    #[test]
    fn test_bad_parameters_fail_before_iterating() {
        let g = graph(&[("a", "b")]);
        for d in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let err = PageRank::new().with_damping(d).run(&g).unwrap_err();
            assert!(matches!(
                err,
                RankError::InvalidParameter { name: "damping_factor", .. }
            ));
        }
        for tol in [0.0, -1e-6, f64::INFINITY, f64::NAN] {
            assert!(PageRank::new().with_tolerance(tol).validate().is_err());
        }
        assert!(PageRank::new().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn test_parallel_matches_sequential_bitwise() {
        let g = graph(&[
            ("a", "b"),
            ("a", "c"),
            ("b", "c"),
            ("c", "a"),
            ("d", "c"),
            ("c", "e"),
        ]);
        let seq = PageRank::new().run(&g).unwrap();
        let par = PageRank::new().with_parallel(true).run(&g).unwrap();
        assert_eq!(seq.iterations, par.iterations);
        for (a, b) in seq.scores.iter().zip(&par.scores) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_l1_norm_is_never_smaller_than_max() {
        let old = [0.5, 0.25, 0.25];
        let new = [0.4, 0.35, 0.25];
        let max = measure_delta(DeltaNorm::Max, &old, &new);
        let l1 = measure_delta(DeltaNorm::L1, &old, &new);
        assert!((max - 0.1).abs() < 1e-12);
        assert!((l1 - 0.2).abs() < 1e-12);
    }
}
