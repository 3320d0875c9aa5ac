//! # syncdata-rs
//!
//! Resilient batch operations for a remote object store.
//!
//! A large, ordered list of keys is split into fixed-size batches that are sent
//! concurrently to the store's endpoints. Keys that fail with a transient
//! (5xx) status are retried in later rounds, endpoints that fail a call are
//! avoided for the rest of the operation, and the result vector always lines
//! up with the input.
//!
//! ## Features
//!
//! - **Bounded concurrency**: at most `batch_concurrency` calls in flight
//! - **Per-key retries**: only transiently failed keys are sent again
//! - **Endpoint failover**: round-robin or weighted selection skipping failed hosts
//! - **Cancellation**: every operation accepts a `CancellationToken`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use syncdata_rs::{BatchOptions, BatchRetryExecutor, EndpointSelector, ItemOutcome, SyncError};
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let selector = Arc::new(EndpointSelector::round_robin(["rs1:9433", "rs2:9433"])?);
//!     let action = |endpoint: String, keys: Vec<String>| async move {
//!         println!("deleting {} keys on {}", keys.len(), endpoint);
//!         Ok::<_, SyncError>(keys.iter().map(|_| ItemOutcome::ok()).collect())
//!     };
//!
//!     let executor = BatchRetryExecutor::new(Arc::new(action), selector, BatchOptions::new())?;
//!     let keys: Vec<String> = (0..5000).map(|i| format!("logs/{}.gz", i)).collect();
//!     let results = executor.run(&keys, &CancellationToken::new()).await?;
//!
//!     println!("{} keys processed", results.len());
//!     Ok(())
//! }
//! ```
//!
//! ## From configuration
//!
//! ```rust,no_run
//! use syncdata_rs::{Config, Lister, ObjectClient};
//! use std::sync::Arc;
//!
//! async fn purge(client: Arc<dyn ObjectClient>, keys: &[String]) -> syncdata_rs::Result<()> {
//!     let config = Config::from_file("config/syncdata.yaml").await?;
//!     let lister = Lister::new(&config, client)?;
//!     for outcome in lister.delete_keys(keys).await? {
//!         if let Some(err) = outcome.error() {
//!             eprintln!("{}", err);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::batch::{
    BatchAction, BatchOptions, BatchPartitioner, BatchRetryExecutor, BatchSummary, ItemOutcome,
    KeyError, KeyOutcome, batch_retry,
};
pub use core::operation::{Lister, ObjectClient, ObjectOperation};
pub use core::pool::{PoolStats, WorkerPool};
pub use core::selector::{EndpointId, EndpointSelector, FailedEndpoints, SelectionStrategy};
pub use utils::error::{Result, SyncError};
pub use utils::logging::{LogLevel, LoggingUtils};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
