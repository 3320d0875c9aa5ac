//! Logging utilities
//!
//! Thin setup layer over `tracing-subscriber`. The rest of the crate logs through
//! the `tracing` macros directly.

pub mod types;
pub mod utils;

pub use types::LogLevel;
pub use utils::LoggingUtils;
