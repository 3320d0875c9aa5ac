//! One pool unit: a single batch sent to the remote store

use super::action::BatchAction;
use super::types::KeyOutcome;
use crate::core::selector::{EndpointSelector, FailedEndpoints};
use crate::utils::error::{Result, SyncError};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Outcomes of one round, indexed by round-local position
pub(super) type RoundBuffer = Arc<Mutex<Vec<Option<KeyOutcome>>>>;

pub(super) struct BatchUnit<A: BatchAction> {
    pub action: Arc<A>,
    pub selector: Arc<EndpointSelector>,
    pub failed: Arc<FailedEndpoints>,
    pub keys: Vec<String>,
    pub base_offset: usize,
    pub max_attempts: u32,
    pub buffer: RoundBuffer,
}

impl<A: BatchAction> BatchUnit<A> {
    /// Send the batch, moving to another endpoint after each call-level failure
    pub async fn run(self, token: CancellationToken) -> Result<()> {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            if token.is_cancelled() {
                return Err(SyncError::Cancelled);
            }

            let endpoint = self.selector.select(&self.failed);
            debug!(
                "Sending batch at offset {} ({} keys) to {} (attempt {}/{})",
                self.base_offset,
                self.keys.len(),
                endpoint,
                attempt,
                self.max_attempts
            );

            let call = self.action.call(endpoint.clone(), self.keys.clone());
            let result = tokio::select! {
                biased;
                _ = token.cancelled() => return Err(SyncError::Cancelled),
                result = call => result,
            };

            let result = result.and_then(|items| {
                if items.len() == self.keys.len() {
                    Ok(items)
                } else {
                    Err(SyncError::OutcomeMismatch {
                        endpoint: endpoint.clone(),
                        expected: self.keys.len(),
                        actual: items.len(),
                    })
                }
            });

            match result {
                Ok(items) => {
                    self.selector.report_success(&endpoint);
                    let outcomes = items
                        .into_iter()
                        .zip(&self.keys)
                        .map(|(item, key)| KeyOutcome::from_item(key, item));
                    self.record(outcomes);
                    return Ok(());
                }
                Err(err) if err.is_cancelled() => return Err(err),
                Err(err) => {
                    self.selector.report_failure(&endpoint);
                    self.failed.insert(&endpoint);
                    warn!(
                        "Batch at offset {} failed on {} (attempt {}/{}): {}",
                        self.base_offset, endpoint, attempt, self.max_attempts, err
                    );
                    last_error = Some(err);
                }
            }
        }

        Err(SyncError::ActionFailed {
            offset: self.base_offset,
            attempts: self.max_attempts,
            source: Box::new(
                last_error.unwrap_or_else(|| SyncError::internal("Batch was never attempted")),
            ),
        })
    }

    fn record(&self, outcomes: impl Iterator<Item = KeyOutcome>) {
        let mut buffer = self.buffer.lock();
        for (index, outcome) in outcomes.enumerate() {
            if let KeyOutcome::Failed(err) = &outcome {
                warn!("Batch item failed: {}", err);
            }
            buffer[self.base_offset + index] = Some(outcome);
        }
    }
}
