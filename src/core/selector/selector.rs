//! Endpoint selector
//!
//! Owns the ordered endpoint list and the health counters of one operation
//! context. Nothing here is process-wide: two selectors never share state.

use super::config::SelectionStrategy;
use super::endpoint::{Endpoint, EndpointHealth, EndpointId, HealthSnapshot};
use super::failed::FailedEndpoints;
use super::strategy_impl;
use crate::config::HostsConfig;
use crate::utils::error::{Result, SyncError};
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering::Relaxed};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct EndpointSelector {
    /// Candidate endpoints in configured order
    endpoints: Vec<Endpoint>,
    /// Health counters per endpoint
    health: DashMap<EndpointId, EndpointHealth>,
    strategy: SelectionStrategy,
    round_robin_counter: AtomicUsize,
    /// Monotonic failure clock backing least-recently-failed ordering
    failure_seq: AtomicU64,
}

impl EndpointSelector {
    /// Create a selector over an ordered endpoint list
    pub fn new(endpoints: Vec<Endpoint>, strategy: SelectionStrategy) -> Result<Self> {
        if endpoints.is_empty() {
            return Err(SyncError::NoEndpoints);
        }

        let health = DashMap::with_capacity(endpoints.len());
        for endpoint in &endpoints {
            if endpoint.id.trim().is_empty() {
                return Err(SyncError::config("Endpoint id cannot be empty"));
            }
            if health
                .insert(endpoint.id.clone(), EndpointHealth::default())
                .is_some()
            {
                return Err(SyncError::config(format!(
                    "Duplicate endpoint: {}",
                    endpoint.id
                )));
            }
        }

        debug!(
            "Created endpoint selector with {} endpoints ({:?})",
            endpoints.len(),
            strategy
        );

        Ok(Self {
            endpoints,
            health,
            strategy,
            round_robin_counter: AtomicUsize::new(0),
            failure_seq: AtomicU64::new(0),
        })
    }

    /// Create a selector from the hosts configuration
    pub fn from_config(hosts: &HostsConfig, strategy: SelectionStrategy) -> Result<Self> {
        let endpoints = hosts
            .rs_hosts
            .iter()
            .map(|host| Endpoint::new(host.clone()).with_weight(hosts.weight_of(host)))
            .collect();
        Self::new(endpoints, strategy)
    }

    /// Create a round-robin selector over plain host names
    pub fn round_robin<I, S>(hosts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<EndpointId>,
    {
        Self::new(
            hosts.into_iter().map(Endpoint::new).collect(),
            SelectionStrategy::RoundRobin,
        )
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Pick the next endpoint that is not in `excluded`
    ///
    /// When every endpoint is excluded the least-recently-failed one is returned
    /// instead, so callers keep making progress rather than stalling.
    pub fn next(&self, excluded: &HashSet<EndpointId>) -> EndpointId {
        let candidates: Vec<&Endpoint> = self
            .endpoints
            .iter()
            .filter(|endpoint| !excluded.contains(&endpoint.id))
            .collect();

        if candidates.is_empty() {
            let fallback = self.least_recently_failed();
            warn!(
                "All {} endpoints excluded, falling back to least recently failed: {}",
                self.endpoints.len(),
                fallback
            );
            return fallback;
        }

        let selected = match self.strategy {
            SelectionStrategy::RoundRobin => {
                strategy_impl::round_robin(&candidates, &self.round_robin_counter)
            }
            SelectionStrategy::Weighted => strategy_impl::weighted_random(&candidates),
        };

        selected.id.clone()
    }

    /// Pick the next endpoint while holding the shared lock on `failed`
    pub fn select(&self, failed: &FailedEndpoints) -> EndpointId {
        let excluded = failed.read();
        self.next(&excluded)
    }

    /// Record a successful call against `id`
    pub fn report_success(&self, id: &str) {
        if let Some(health) = self.health.get(id) {
            health.record_success();
        }
        debug!("Endpoint {} succeeded", id);
    }

    /// Record a failed call against `id`
    ///
    /// Callers also add `id` to the operation's `FailedEndpoints`.
    pub fn report_failure(&self, id: &str) {
        let seq = self.failure_seq.fetch_add(1, Relaxed) + 1;
        if let Some(health) = self.health.get(id) {
            health.record_failure(seq);
        }
        warn!("Endpoint {} failed", id);
    }

    /// Health counters for one endpoint
    pub fn health(&self, id: &str) -> Option<HealthSnapshot> {
        self.health.get(id).map(|entry| entry.value().snapshot())
    }

    /// Health counters for all endpoints, in configured order
    pub fn health_snapshot(&self) -> Vec<(EndpointId, HealthSnapshot)> {
        self.endpoints
            .iter()
            .map(|endpoint| {
                let snapshot = self.health(&endpoint.id).unwrap_or_default();
                (endpoint.id.clone(), snapshot)
            })
            .collect()
    }

    fn least_recently_failed(&self) -> EndpointId {
        // min_by_key keeps the first minimum, so ties go to configured order
        self.endpoints
            .iter()
            .min_by_key(|endpoint| {
                self.health
                    .get(&endpoint.id)
                    .map(|h| h.last_failure_seq.load(Relaxed))
                    .unwrap_or(0)
            })
            .map(|endpoint| endpoint.id.clone())
            .unwrap_or_default()
    }
}
