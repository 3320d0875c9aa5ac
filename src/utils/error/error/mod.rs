//! Error handling for batch operations
//!
//! This module defines all error types used throughout the crate.

mod conversions;
mod helpers;
mod types;

pub use types::{Result, SyncError};
