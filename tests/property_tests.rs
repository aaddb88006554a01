//! Property-based tests for the ranking pipeline.
//!
//! These tests verify invariants that should hold for any link graph:
//! - Rank mass stays at 1 after every iteration
//! - Adjacency views agree
//! - Output order is total and repeatable

use linkrank_core::config::Config;
use linkrank_core::graph::{BuiltGraph, GraphBuilder, InputPolicy};
use linkrank_core::ingest::EdgeRecord;
use linkrank_core::rank::{PageRank, RankReporter, RecordingObserver};
use linkrank_core::reporting::{render, OutputFormat};
use linkrank_core::GraphEngine;
use proptest::prelude::*;

/// Random edge lists over a small id space, so duplicates, self links,
/// dangling nodes and islands all show up.
fn arb_edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..24, 0u8..24), 1..80)
}

fn build(edges: &[(u8, u8)]) -> BuiltGraph {
    let mut b = GraphBuilder::new(InputPolicy::Strict);
    for (s, t) in edges {
        b.add_edge(&format!("https://tasty.co/recipe/{s}"), &format!("https://tasty.co/recipe/{t}"))
            .unwrap();
    }
    b.finish()
}

fn records(edges: &[(u8, u8)]) -> Vec<linkrank_core::Result<EdgeRecord>> {
    edges
        .iter()
        .enumerate()
        .map(|(i, (s, t))| Ok(EdgeRecord::new(i + 2, format!("p{s}"), format!("p{t}"))))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn mass_is_conserved_every_iteration(edges in arb_edges(), damping in 0.05f64..0.95) {
        let built = build(&edges);
        let mut obs = RecordingObserver::new();
        let result = PageRank::new()
            .with_damping(damping)
            .run_observed(&built.graph, &mut obs)
            .unwrap();

        for r in &obs.records {
            prop_assert!((r.rank_sum - 1.0).abs() < 1e-9, "sum {} at {}", r.rank_sum, r.iteration);
        }
        prop_assert!(result.scores.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn teleport_share_is_a_floor(edges in arb_edges()) {
        let built = build(&edges);
        let n = built.graph.node_count() as f64;
        let result = PageRank::new().run(&built.graph).unwrap();
        for s in &result.scores {
            prop_assert!(*s >= (1.0 - 0.85) / n - 1e-15);
        }
    }

    #[test]
    fn adjacency_views_agree(edges in arb_edges()) {
        let g = build(&edges).graph;
        for (s, t) in g.edges() {
            prop_assert!(g.in_neighbors(t).binary_search(&s).is_ok());
        }
        let outs: usize = (0..g.node_count()).map(|n| g.out_degree(n)).sum();
        let ins: usize = (0..g.node_count()).map(|n| g.in_degree(n)).sum();
        prop_assert_eq!(outs, g.edge_count());
        prop_assert_eq!(ins, g.edge_count());
    }

    #[test]
    fn parallel_and_sequential_agree_bitwise(edges in arb_edges()) {
        let g = build(&edges).graph;
        let seq = PageRank::new().run(&g).unwrap();
        let par = PageRank::new().with_parallel(true).run(&g).unwrap();
        prop_assert_eq!(seq.iterations, par.iterations);
        for (a, b) in seq.scores.iter().zip(&par.scores) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn ranking_is_sorted_and_repeatable(edges in arb_edges()) {
        let config = Config::default();
        let first = GraphEngine::rank_records(records(&edges), &config, &mut RecordingObserver::new()).unwrap();
        let second = GraphEngine::rank_records(records(&edges), &config, &mut RecordingObserver::new()).unwrap();

        let a = render(first.reporter.top(config.rank.top_k), OutputFormat::Csv).unwrap();
        let b = render(second.reporter.top(config.rank.top_k), OutputFormat::Csv).unwrap();
        prop_assert_eq!(a, b);

        for pair in first.reporter.entries().windows(2) {
            let ordered = pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].identifier < pair[1].identifier);
            prop_assert!(ordered);
        }
    }

    #[test]
    fn reporter_covers_every_node_once(edges in arb_edges()) {
        let built = build(&edges);
        let result = PageRank::new().run(&built.graph).unwrap();
        let reporter = RankReporter::new(&result.scores, &built.index).unwrap();
        prop_assert_eq!(reporter.len(), built.graph.node_count());
        let mut names: Vec<_> = reporter.entries().iter().map(|e| e.identifier.clone()).collect();
        names.sort();
        names.dedup();
        prop_assert_eq!(names.len(), built.graph.node_count());
    }
}
