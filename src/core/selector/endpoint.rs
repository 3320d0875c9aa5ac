//! Endpoint descriptors and health counters
//!
//! Health counters use atomics with `Relaxed` ordering. They only feed
//! diagnostics and the least-recently-failed fallback, neither of which needs
//! cross-field consistency.

use std::sync::atomic::{AtomicU64, Ordering::Relaxed};

/// Endpoint identifier (host name or address)
pub type EndpointId = String;

/// One candidate endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Endpoint identifier
    pub id: EndpointId,
    /// Weight for weighted selection (higher = more likely to be selected)
    pub weight: u32,
}

impl Endpoint {
    /// Create an endpoint with the default weight of 1
    pub fn new(id: impl Into<EndpointId>) -> Self {
        Self {
            id: id.into(),
            weight: 1,
        }
    }

    /// Set the weight (builder pattern)
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }
}

/// Runtime health counters for one endpoint
#[derive(Debug, Default)]
pub struct EndpointHealth {
    /// Successful calls
    pub successes: AtomicU64,
    /// Failed calls
    pub failures: AtomicU64,
    /// Sequence number of the most recent failure (0 = never failed)
    pub last_failure_seq: AtomicU64,
}

impl EndpointHealth {
    pub fn record_success(&self) {
        self.successes.fetch_add(1, Relaxed);
    }

    pub fn record_failure(&self, seq: u64) {
        self.failures.fetch_add(1, Relaxed);
        self.last_failure_seq.fetch_max(seq, Relaxed);
    }

    pub fn snapshot(&self) -> HealthSnapshot {
        HealthSnapshot {
            successes: self.successes.load(Relaxed),
            failures: self.failures.load(Relaxed),
            last_failure_seq: self.last_failure_seq.load(Relaxed),
        }
    }
}

/// Point-in-time copy of an endpoint's health counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthSnapshot {
    pub successes: u64,
    pub failures: u64,
    pub last_failure_seq: u64,
}
