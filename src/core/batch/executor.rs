//! Retry orchestration over batches of keys
//!
//! Every round partitions the current keys, dispatches one pool unit per batch
//! and collects the outcomes. Keys that failed with a 5xx status form the next
//! round, mapped back to their positions in the input list.

use super::action::BatchAction;
use super::options::BatchOptions;
use super::partition::BatchPartitioner;
use super::types::{BatchSummary, KeyOutcome};
use super::unit::{BatchUnit, RoundBuffer};
use crate::core::pool::WorkerPool;
use crate::core::selector::{EndpointSelector, FailedEndpoints};
use crate::utils::error::{Result, SyncError};
use crate::utils::logging::LoggingUtils;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Runs a batch action over a key list with per-key retries
pub struct BatchRetryExecutor<A: BatchAction> {
    action: Arc<A>,
    selector: Arc<EndpointSelector>,
    options: BatchOptions,
    partitioner: BatchPartitioner,
}

impl<A: BatchAction> BatchRetryExecutor<A> {
    pub fn new(
        action: Arc<A>,
        selector: Arc<EndpointSelector>,
        options: BatchOptions,
    ) -> Result<Self> {
        let partitioner = BatchPartitioner::new(options.batch_size)?;
        Ok(Self {
            action,
            selector,
            options,
            partitioner,
        })
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    pub fn selector(&self) -> &Arc<EndpointSelector> {
        &self.selector
    }

    /// Apply the action to every key
    ///
    /// The returned vector is aligned with `keys`. Per-key failures are
    /// reported in it; `Err` means the operation was aborted and no result is
    /// available.
    pub async fn run(
        &self,
        keys: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<KeyOutcome>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        info!(
            "Starting batch operation: {} keys, batch size {}, up to {} concurrent calls",
            keys.len(),
            self.options.batch_size,
            self.options.batch_concurrency
        );

        // Excluded endpoints persist across the rounds of this call only
        let failed = Arc::new(FailedEndpoints::new());
        let mut results: Vec<Option<KeyOutcome>> = vec![None; keys.len()];
        let mut round_keys: Vec<String> = keys.to_vec();
        let mut index_map: Vec<usize> = (0..keys.len()).collect();
        let mut retries_left = self.options.retries;
        let mut round = 0u32;

        loop {
            let outcomes = match self.run_round(&round_keys, &failed, cancel).await {
                Ok(outcomes) => outcomes,
                Err(err) => {
                    error!("Batch operation aborted in round {}: {}", round, err);
                    return Err(err);
                }
            };

            let retry_local: Vec<usize> = outcomes
                .iter()
                .enumerate()
                .filter(|(_, outcome)| outcome.is_retryable())
                .map(|(local, _)| local)
                .collect();

            for (local, outcome) in outcomes.into_iter().enumerate() {
                results[index_map[local]] = Some(outcome);
            }

            if retries_left == 0 || retry_local.is_empty() {
                break;
            }

            retries_left -= 1;
            round += 1;
            warn!(
                "Retrying {} keys with transient failures (round {}, {} retries left)",
                retry_local.len(),
                round,
                retries_left
            );

            index_map = retry_local.iter().map(|&local| index_map[local]).collect();
            round_keys = retry_local
                .iter()
                .map(|&local| round_keys[local].clone())
                .collect();
        }

        let outcomes = results
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| {
                    SyncError::internal(format!("No outcome recorded for key at index {}", index))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let summary = BatchSummary::from_outcomes(&outcomes);
        info!(
            "Batch operation finished in {}: {} succeeded, {} failed ({} retryable), {} rounds",
            LoggingUtils::format_duration(start.elapsed()),
            summary.succeeded,
            summary.failed,
            summary.retryable,
            round + 1
        );

        Ok(outcomes)
    }

    async fn run_round(
        &self,
        keys: &[String],
        failed: &Arc<FailedEndpoints>,
        cancel: &CancellationToken,
    ) -> Result<Vec<KeyOutcome>> {
        let batches = self.partitioner.partition(keys);
        let concurrency = WorkerPool::concurrency_for(
            keys.len(),
            self.partitioner.batch_size(),
            self.options.batch_concurrency,
        );
        debug!(
            "Dispatching {} batches over {} workers",
            batches.len(),
            concurrency
        );

        let buffer: RoundBuffer = Arc::new(Mutex::new(vec![None; keys.len()]));
        let mut pool = WorkerPool::new(concurrency, cancel);

        for batch in batches {
            let unit = BatchUnit {
                action: self.action.clone(),
                selector: self.selector.clone(),
                failed: failed.clone(),
                keys: batch.keys.to_vec(),
                base_offset: batch.base_offset,
                max_attempts: self.options.max_attempts(),
                buffer: buffer.clone(),
            };
            if pool.submit(move |token| unit.run(token)).await.is_err() {
                break;
            }
        }

        pool.wait().await?;

        let slots = std::mem::take(&mut *buffer.lock());
        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| {
                    SyncError::internal(format!("Batch unit left key {} without an outcome", index))
                })
            })
            .collect()
    }
}

/// Run `action` over `keys` with a fresh cancellation token
pub async fn batch_retry<A: BatchAction>(
    keys: &[String],
    retries: u32,
    action: A,
    action_max_retries: u32,
    batch_size: usize,
    batch_concurrency: usize,
    selector: Arc<EndpointSelector>,
) -> Result<Vec<KeyOutcome>> {
    let options = BatchOptions {
        retries,
        action_max_retries,
        batch_size,
        batch_concurrency,
    };
    BatchRetryExecutor::new(Arc::new(action), selector, options)?
        .run(keys, &CancellationToken::new())
        .await
}
