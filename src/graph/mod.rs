// src/graph/mod.rs
//! Link graph: identifier map, immutable adjacency, construction and stats.

pub mod builder;
pub mod index;
pub mod model;
pub mod stats;

pub use builder::{build, BuildSummary, BuiltGraph, GraphBuilder, InputPolicy, SkippedRecord};
pub use index::NodeIndex;
pub use model::Graph;
pub use stats::GraphStats;

/// Dense node index, assigned in first-seen order.
pub type NodeId = usize;
