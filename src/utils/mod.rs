//! Utility modules for the batch executor
//!
//! ## Module Organization
//!
//! - **error**: Error type and crate-wide `Result` alias
//! - **logging**: Log levels and subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging

pub use error::{Result, SyncError};
pub use logging::{LogLevel, LoggingUtils};
