//! Pool instrumentation

use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};

/// Counters describing how a pool ran its units
#[derive(Debug, Default)]
pub struct PoolStats {
    active: AtomicUsize,
    peak: AtomicUsize,
    completed: AtomicUsize,
}

impl PoolStats {
    /// Units currently running
    pub fn active(&self) -> usize {
        self.active.load(Relaxed)
    }

    /// Highest number of units that ran at the same time
    pub fn peak(&self) -> usize {
        self.peak.load(Relaxed)
    }

    /// Units that ran to completion, successfully or not
    pub fn completed(&self) -> usize {
        self.completed.load(Relaxed)
    }

    /// Mark a unit as running until the returned guard drops
    pub(super) fn enter(&self) -> RunningUnit<'_> {
        let now = self.active.fetch_add(1, Relaxed) + 1;
        self.peak.fetch_max(now, Relaxed);
        RunningUnit { stats: self }
    }
}

/// Keeps a unit counted as active, including when it panics
pub(super) struct RunningUnit<'a> {
    stats: &'a PoolStats,
}

impl Drop for RunningUnit<'_> {
    fn drop(&mut self) {
        self.stats.active.fetch_sub(1, Relaxed);
        self.stats.completed.fetch_add(1, Relaxed);
    }
}
