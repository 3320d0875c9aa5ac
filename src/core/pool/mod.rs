//! Bounded worker pool for batch units
//!
//! Runs cancellable units of work on tokio tasks with a fixed upper bound on
//! how many run at once. The first unit error cancels the pool.

mod pool;
mod stats;


pub use pool::WorkerPool;
pub use stats::PoolStats;
