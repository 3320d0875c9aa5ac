//! Batch execution with per-key retries
//!
//! A key list is split into batches that are sent concurrently to the remote
//! store. Keys that fail with a transient (5xx) status are retried in later
//! rounds; every other outcome is final. Results stay aligned with the input.

mod action;
mod executor;
mod options;
pub mod partition;
mod types;
mod unit;

#[cfg(test)]
mod tests;

pub use action::BatchAction;
pub use executor::{BatchRetryExecutor, batch_retry};
pub use options::BatchOptions;
pub use partition::BatchPartitioner;
pub use types::{Batch, BatchSummary, ItemOutcome, KeyError, KeyOutcome, STATUS_OK};
