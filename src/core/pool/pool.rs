//! Worker pool implementation

use super::stats::PoolStats;
use crate::utils::error::{Result, SyncError};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// Bounded pool of cancellable units
///
/// `submit` waits for a free slot before spawning, so a producer feeding the
/// pool is throttled to the pool's concurrency. Units receive a child of the
/// caller's token. A unit error trips a separate abort signal that ends
/// `submit` and `wait` but leaves running siblings alone.
#[derive(Debug)]
pub struct WorkerPool {
    semaphore: Arc<Semaphore>,
    tasks: JoinSet<()>,
    token: CancellationToken,
    abort: CancellationToken,
    concurrency: usize,
    stats: Arc<PoolStats>,
    first_error: Arc<Mutex<Option<SyncError>>>,
}

impl WorkerPool {
    /// Create a pool running at most `concurrency` units at once
    pub fn new(concurrency: usize, parent: &CancellationToken) -> Self {
        let concurrency = concurrency.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(concurrency)),
            tasks: JoinSet::new(),
            token: parent.child_token(),
            abort: CancellationToken::new(),
            concurrency,
            stats: Arc::new(PoolStats::default()),
            first_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Pool size for `total_keys` keys split into batches of `batch_size`
    pub fn concurrency_for(total_keys: usize, batch_size: usize, max_concurrency: usize) -> usize {
        total_keys
            .div_ceil(batch_size.max(1))
            .min(max_concurrency)
            .max(1)
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn stats(&self) -> Arc<PoolStats> {
        self.stats.clone()
    }

    /// The token handed to every unit
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Fires once a unit has failed; units never observe it
    pub fn abort_signal(&self) -> &CancellationToken {
        &self.abort
    }

    pub fn is_aborted(&self) -> bool {
        self.abort.is_cancelled()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel the pool as the caller would; running units observe it
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Spawn one unit once a slot is free
    ///
    /// Returns `Err(Cancelled)` without running the unit when the pool is
    /// cancelled or aborted before a slot opens. The unit error itself is
    /// reported by [`WorkerPool::wait`].
    pub async fn submit<F, Fut>(&mut self, unit: F) -> Result<()>
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let permit = tokio::select! {
            biased;
            _ = self.token.cancelled() => return Err(SyncError::Cancelled),
            _ = self.abort.cancelled() => return Err(SyncError::Cancelled),
            permit = self.semaphore.clone().acquire_owned() => {
                permit.map_err(|_| SyncError::internal("Worker pool semaphore closed"))?
            }
        };

        let token = self.token.clone();
        let abort = self.abort.clone();
        let stats = self.stats.clone();
        let first_error = self.first_error.clone();

        self.tasks.spawn(async move {
            let _permit = permit;
            let result = {
                let _running = stats.enter();
                unit(token).await
            };

            if let Err(err) = result {
                record_error(&first_error, &abort, err);
            }
        });

        Ok(())
    }

    /// Wait until every submitted unit has finished, a unit fails, or the
    /// pool is cancelled
    ///
    /// Returns the first unit error, `Cancelled` when the caller's token fired,
    /// and `Ok(())` otherwise. Units still running on error are detached and
    /// run to completion.
    pub async fn wait(mut self) -> Result<()> {
        loop {
            tokio::select! {
                biased;
                _ = self.token.cancelled() => break,
                _ = self.abort.cancelled() => break,
                joined = self.tasks.join_next() => match joined {
                    None => break,
                    Some(Ok(())) => {}
                    Some(Err(join_err)) => {
                        record_error(&self.first_error, &self.abort, join_err.into());
                    }
                },
            }
        }

        let first_error = self.first_error.lock().take();
        if let Some(err) = first_error {
            self.detach_remaining();
            return Err(err);
        }

        if self.token.is_cancelled() {
            self.detach_remaining();
            return Err(SyncError::Cancelled);
        }

        debug!(
            "Worker pool drained: {} units, peak concurrency {}",
            self.stats.completed(),
            self.stats.peak()
        );
        Ok(())
    }

    fn detach_remaining(&mut self) {
        if !self.tasks.is_empty() {
            debug!("Detaching {} running units", self.tasks.len());
        }
        self.tasks.detach_all();
    }
}

fn record_error(slot: &Mutex<Option<SyncError>>, abort: &CancellationToken, err: SyncError) {
    let mut slot = slot.lock();
    if slot.is_none() {
        error!("Worker unit failed, aborting pool: {}", err);
        *slot = Some(err);
    } else {
        debug!("Additional worker unit failure: {}", err);
    }
    abort.cancel();
}
