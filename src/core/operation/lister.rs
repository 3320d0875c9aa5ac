//! Bulk key operations against one bucket

use super::client::{ObjectClient, ObjectOperation};
use crate::config::{Config, HostsConfig};
use crate::core::batch::{BatchOptions, BatchRetryExecutor, BatchSummary, KeyOutcome};
use crate::core::selector::{EndpointId, EndpointSelector, SelectionStrategy};
use crate::utils::error::{Result, SyncError};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Runs bulk operations for one bucket
///
/// Every call gets its own endpoint selector, so health counters and
/// exclusions never leak from one operation into the next.
#[derive(Clone)]
pub struct Lister {
    client: Arc<dyn ObjectClient>,
    bucket: String,
    hosts: HostsConfig,
    selection: SelectionStrategy,
    options: BatchOptions,
}

impl Lister {
    /// Create a lister from a validated configuration
    pub fn new(config: &Config, client: Arc<dyn ObjectClient>) -> Result<Self> {
        config.validate()?;
        if config.bucket.trim().is_empty() {
            return Err(SyncError::config("Bucket must be set"));
        }

        EndpointSelector::from_config(config.hosts(), config.batch().selection)?;

        Ok(Self {
            client,
            bucket: config.bucket.clone(),
            hosts: config.hosts().clone(),
            selection: config.batch().selection,
            options: BatchOptions::from(config.batch()),
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    pub fn hosts(&self) -> &HostsConfig {
        &self.hosts
    }

    pub fn selection(&self) -> SelectionStrategy {
        self.selection
    }

    /// A fresh selector over the configured hosts
    pub fn new_selector(&self) -> Result<EndpointSelector> {
        EndpointSelector::from_config(&self.hosts, self.selection)
    }

    /// Delete every key, retrying transient failures
    pub async fn delete_keys(&self, keys: &[String]) -> Result<Vec<KeyOutcome>> {
        self.delete_keys_with_cancel(keys, &CancellationToken::new())
            .await
    }

    pub async fn delete_keys_with_cancel(
        &self,
        keys: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<KeyOutcome>> {
        self.run(ObjectOperation::Delete, keys, cancel).await
    }

    /// Stat every key, retrying transient failures
    pub async fn stat_keys(&self, keys: &[String]) -> Result<Vec<KeyOutcome>> {
        self.stat_keys_with_cancel(keys, &CancellationToken::new())
            .await
    }

    pub async fn stat_keys_with_cancel(
        &self,
        keys: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<KeyOutcome>> {
        self.run(ObjectOperation::Stat, keys, cancel).await
    }

    async fn run(
        &self,
        operation: ObjectOperation,
        keys: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<KeyOutcome>> {
        info!(
            "Running {} on {} keys in bucket {}",
            operation,
            keys.len(),
            self.bucket
        );

        let client = self.client.clone();
        let bucket = self.bucket.clone();
        let action = move |endpoint: EndpointId, keys: Vec<String>| {
            let client = client.clone();
            let bucket = bucket.clone();
            async move {
                match operation {
                    ObjectOperation::Delete => client.batch_delete(&endpoint, &bucket, &keys).await,
                    ObjectOperation::Stat => client.batch_stat(&endpoint, &bucket, &keys).await,
                }
            }
        };

        let selector = Arc::new(self.new_selector()?);
        let executor = BatchRetryExecutor::new(Arc::new(action), selector, self.options)?;
        let outcomes = executor.run(keys, cancel).await?;

        let summary = BatchSummary::from_outcomes(&outcomes);
        info!(
            "Finished {} in bucket {}: {} of {} keys succeeded",
            operation, self.bucket, summary.succeeded, summary.total
        );
        Ok(outcomes)
    }
}

impl std::fmt::Debug for Lister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lister")
            .field("bucket", &self.bucket)
            .field("hosts", &self.hosts.rs_hosts)
            .field("selection", &self.selection)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
