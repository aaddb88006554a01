// src/rank/observer.rs
//! Per-iteration hooks for the ranking loop.
//!
//! The engine hands every completed iteration to an observer and never looks
//! at what the observer does with it, so console progress, event logs and
//! tests can all watch the same run.

use serde::Serialize;

/// State after one completed iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IterationRecord {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Change from the previous vector, measured with the configured norm.
    pub delta: f64,
    /// Sum of the new vector; 1.0 up to rounding.
    pub rank_sum: f64,
    /// Mass held by dangling nodes in the previous vector.
    pub dangling_mass: f64,
}

pub trait IterationObserver {
    fn on_iteration(&mut self, record: &IterationRecord);
}

/// Ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl IterationObserver for NoopObserver {
    fn on_iteration(&mut self, _record: &IterationRecord) {}
}

/// Keeps the full iteration history.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub records: Vec<IterationRecord>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IterationObserver for RecordingObserver {
    fn on_iteration(&mut self, record: &IterationRecord) {
        self.records.push(*record);
    }
}

impl<F: FnMut(&IterationRecord)> IterationObserver for F {
    fn on_iteration(&mut self, record: &IterationRecord) {
        self(record);
    }
}

/// Fans one run out to several observers.
pub struct ObserverSet<'a> {
    observers: Vec<&'a mut dyn IterationObserver>,
}

impl<'a> ObserverSet<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn push(&mut self, observer: &'a mut dyn IterationObserver) {
        self.observers.push(observer);
    }
}

impl Default for ObserverSet<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl IterationObserver for ObserverSet<'_> {
    fn on_iteration(&mut self, record: &IterationRecord) {
        for observer in &mut self.observers {
            observer.on_iteration(record);
        }
    }
}
