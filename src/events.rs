// src/events.rs
//! Machine-readable event logging for ranking runs.
//!
//! Events are appended as JSON lines to the file given with `--events`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::rank::{IterationObserver, IterationRecord};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    GraphBuilt {
        nodes: usize,
        edges: usize,
        dangling: usize,
        skipped: usize,
    },
    RecordSkipped {
        origin: Option<String>,
        line: usize,
        reason: String,
    },
    Iteration {
        iteration: usize,
        delta: f64,
        rank_sum: f64,
        dangling_mass: f64,
    },
    RankCompleted {
        iterations: usize,
        delta: f64,
        converged: bool,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LinkRankEvent {
    pub timestamp: u64,
    pub kind: EventKind,
}

#[derive(Clone)]
pub struct EventLogger {
    log_path: PathBuf,
}

impl EventLogger {
    #[must_use]
    pub fn new(log_path: &Path) -> Self {
        Self {
            log_path: log_path.to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    pub fn log(&self, kind: EventKind) {
        // Best-effort: a failed write never fails the run.
        if let Ok(json) = Self::serialize_event(kind) {
            let _ = self.append_to_file(&json);
        }
    }

    fn serialize_event(kind: EventKind) -> Result<String> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let event = LinkRankEvent { timestamp, kind };
        Ok(serde_json::to_string(&event)?)
    }

    fn append_to_file(&self, line: &str) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

impl IterationObserver for EventLogger {
    fn on_iteration(&mut self, record: &IterationRecord) {
        self.log(EventKind::Iteration {
            iteration: record.iteration,
            delta: record.delta,
            rank_sum: record.rank_sum,
            dangling_mass: record.dangling_mass,
        });
    }
}
