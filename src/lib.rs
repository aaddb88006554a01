pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod exit;
pub mod graph;
pub mod ingest;
pub mod rank;
pub mod reporting;

pub use crate::engine::{GraphEngine, RankOutcome};
pub use crate::error::{RankError, Result};
