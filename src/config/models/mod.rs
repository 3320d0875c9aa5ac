//! Configuration data models
//!
//! This module defines all configuration structures used by batch operations.

pub mod batch;
pub mod hosts;
pub mod logging;

pub use batch::*;
pub use hosts::*;
pub use logging::*;

/// Default number of keys per remote batch call
pub fn default_batch_size() -> usize {
    1000
}

/// Default cap on concurrently running batch calls
pub fn default_batch_concurrency() -> usize {
    20
}

/// Default number of retry rounds for 5xx item failures
pub fn default_retries() -> u32 {
    5
}

/// Default number of attempts for a single remote batch call
pub fn default_action_max_retries() -> u32 {
    3
}

/// Default endpoint weight for weighted selection
pub fn default_weight() -> u32 {
    1
}
