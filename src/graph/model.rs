// src/graph/model.rs
//! The immutable directed link graph.

use super::NodeId;

/// Directed graph with out- and in-adjacency kept side by side.
///
/// Both views are filled together by [`super::GraphBuilder`]; `b` is in
/// `out_neighbors(a)` exactly when `a` is in `in_neighbors(b)`. Neighbor
/// lists are sorted ascending and free of duplicates.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    out_adjacency: Vec<Vec<NodeId>>,
    in_adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl Graph {
    pub(crate) fn from_parts(
        mut out_adjacency: Vec<Vec<NodeId>>,
        mut in_adjacency: Vec<Vec<NodeId>>,
        edge_count: usize,
    ) -> Self {
        for list in out_adjacency.iter_mut().chain(in_adjacency.iter_mut()) {
            list.sort_unstable();
        }
        Self {
            out_adjacency,
            in_adjacency,
            edge_count,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.out_adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.out_adjacency.is_empty()
    }

    /// Targets `node` links to.
    ///
    /// # Panics
    /// Panics if `node` is not a node of this graph.
    #[must_use]
    pub fn out_neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.out_adjacency[node]
    }

    /// Sources linking to `node`.
    ///
    /// # Panics
    /// Panics if `node` is not a node of this graph.
    #[must_use]
    pub fn in_neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.in_adjacency[node]
    }

    /// # Panics
    /// Panics if `node` is out of range; see [`Self::out_neighbors`].
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_adjacency[node].len()
    }

    /// # Panics
    /// Panics if `node` is out of range; see [`Self::out_neighbors`].
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.in_adjacency[node].len()
    }

    /// # Panics
    /// Panics if `node` is out of range; see [`Self::out_neighbors`].
    #[must_use]
    pub fn is_dangling(&self, node: NodeId) -> bool {
        self.out_adjacency[node].is_empty()
    }

    /// Nodes with no outgoing links, in index order.
    #[must_use]
    pub fn dangling_nodes(&self) -> Vec<NodeId> {
        (0..self.node_count())
            .filter(|&n| self.is_dangling(n))
            .collect()
    }

    /// False when either id is out of range.
    #[must_use]
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.out_adjacency
            .get(source)
            .is_some_and(|targets| targets.binary_search(&target).is_ok())
    }

    /// Iterates every edge as `(source, target)`, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.out_adjacency
            .iter()
            .enumerate()
            .flat_map(|(s, targets)| targets.iter().map(move |&t| (s, t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Graph {
        // 1 -> 0, 0 -> 0
        Graph::from_parts(vec![vec![0], vec![0]], vec![vec![1, 0], vec![]], 2)
    }

    #[test]
    fn test_from_parts_sorts_neighbors() {
        let g = pair();
        assert_eq!(g.in_neighbors(0), &[0, 1]);
        assert!(!g.is_dangling(0));
        assert_eq!(g.in_degree(1), 0);
    }

    #[test]
    fn test_has_edge_out_of_range_is_false() {
        let g = pair();
        assert!(g.has_edge(1, 0));
        assert!(!g.has_edge(7, 0));
        assert!(!g.has_edge(0, 7));
    }

    #[test]
    #[should_panic]
    fn test_out_neighbors_out_of_range_panics() {
        let _ = pair().out_neighbors(2);
    }
}
