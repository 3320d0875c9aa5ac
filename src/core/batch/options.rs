//! Batch execution options

use crate::config::{
    BatchConfig, default_action_max_retries, default_batch_concurrency, default_batch_size,
    default_retries,
};

/// Tuning knobs for one batch operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Retry rounds for keys that failed with a transient error
    pub retries: u32,
    /// Attempts for a single remote call before the operation is aborted
    pub action_max_retries: u32,
    /// Keys per remote call
    pub batch_size: usize,
    /// Upper bound on concurrent remote calls
    pub batch_concurrency: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            action_max_retries: default_action_max_retries(),
            batch_size: default_batch_size(),
            batch_concurrency: default_batch_concurrency(),
        }
    }
}

impl BatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_action_max_retries(mut self, action_max_retries: u32) -> Self {
        self.action_max_retries = action_max_retries;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_batch_concurrency(mut self, batch_concurrency: usize) -> Self {
        self.batch_concurrency = batch_concurrency;
        self
    }

    /// Attempts per remote call; zero still means one attempt
    pub fn max_attempts(&self) -> u32 {
        self.action_max_retries.max(1)
    }
}

impl From<&BatchConfig> for BatchOptions {
    fn from(config: &BatchConfig) -> Self {
        Self {
            retries: config.retries,
            action_max_retries: config.action_max_retries,
            batch_size: config.batch_size,
            batch_concurrency: config.batch_concurrency,
        }
    }
}
