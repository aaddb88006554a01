// src/graph/stats.rs
//! Structural summary of a link graph.

use serde::Serialize;

use super::model::Graph;
use super::NodeId;

/// Counts reported by `linkrank stats` and after every build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    /// Nodes with no outgoing links.
    pub dangling: usize,
    /// Nodes nothing links to.
    pub without_inlinks: usize,
    pub self_links: usize,
    /// Weakly connected components.
    pub components: usize,
}

impl GraphStats {
    #[must_use]
    pub fn of(graph: &Graph) -> Self {
        let n = graph.node_count();
        Self {
            nodes: n,
            edges: graph.edge_count(),
            dangling: (0..n).filter(|&i| graph.is_dangling(i)).count(),
            without_inlinks: (0..n).filter(|&i| graph.in_degree(i) == 0).count(),
            self_links: (0..n).filter(|&i| graph.has_edge(i, i)).count(),
            components: weak_components(graph),
        }
    }
}

/// Counts components ignoring edge direction, using an explicit frontier.
fn weak_components(graph: &Graph) -> usize {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut frontier: Vec<NodeId> = Vec::new();
    let mut components = 0;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        components += 1;
        visited[start] = true;
        frontier.push(start);

        while let Some(node) = frontier.pop() {
            let neighbors = graph.out_neighbors(node).iter().chain(graph.in_neighbors(node));
            for &next in neighbors {
                if !visited[next] {
                    visited[next] = true;
                    frontier.push(next);
                }
            }
        }
    }
    components
}
