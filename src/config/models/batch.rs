//! Batch execution configuration

use super::*;
use crate::core::selector::SelectionStrategy;
use serde::{Deserialize, Serialize};

/// Batch execution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum number of keys per remote call
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Upper bound on concurrently running remote calls
    #[serde(default = "default_batch_concurrency")]
    pub batch_concurrency: usize,
    /// Retry rounds for keys that failed with a 5xx code
    #[serde(default = "default_retries")]
    pub retries: u32,
    /// Attempts for one remote call before the operation is aborted
    #[serde(default = "default_action_max_retries")]
    pub action_max_retries: u32,
    /// Endpoint selection strategy
    #[serde(default)]
    pub selection: SelectionStrategy,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            batch_concurrency: default_batch_concurrency(),
            retries: default_retries(),
            action_max_retries: default_action_max_retries(),
            selection: SelectionStrategy::default(),
        }
    }
}

impl BatchConfig {
    /// Merge batch configurations (non-default values in other take precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.batch_size != default_batch_size() {
            self.batch_size = other.batch_size;
        }
        if other.batch_concurrency != default_batch_concurrency() {
            self.batch_concurrency = other.batch_concurrency;
        }
        if other.retries != default_retries() {
            self.retries = other.retries;
        }
        if other.action_max_retries != default_action_max_retries() {
            self.action_max_retries = other.action_max_retries;
        }
        if other.selection != SelectionStrategy::default() {
            self.selection = other.selection;
        }
        self
    }
}
