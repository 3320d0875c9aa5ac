//! Core functionality for batch operations
//!
//! Components are layered leaves first: endpoint selection, the bounded
//! worker pool, batch execution with retries, and the object store operations
//! built on top of them.

pub mod batch;
pub mod operation;
pub mod pool;
pub mod selector;

pub use batch::{
    BatchAction, BatchOptions, BatchRetryExecutor, BatchSummary, ItemOutcome, KeyError,
    KeyOutcome, batch_retry,
};
pub use operation::{Lister, ObjectClient, ObjectOperation};
pub use pool::{PoolStats, WorkerPool};
pub use selector::{EndpointSelector, FailedEndpoints, SelectionStrategy};
