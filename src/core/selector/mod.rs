//! Endpoint selection for batch calls
//!
//! Picks a working endpoint for each batch attempt while honouring the endpoints
//! already known to be bad for the current operation, and records outcomes.
//!
//! ## Module Structure
//!
//! - `config` - Selection strategy definitions
//! - `endpoint` - Endpoint descriptors and per-endpoint health counters
//! - `failed` - Per-operation set of excluded endpoints
//! - `selector` - The `EndpointSelector` itself
//! - `strategy_impl` - Strategy implementations over a candidate list

pub mod config;
pub mod endpoint;
pub mod failed;
pub mod selector;
pub mod strategy_impl;

#[cfg(test)]
mod tests;

pub use config::SelectionStrategy;
pub use endpoint::{Endpoint, EndpointHealth, EndpointId, HealthSnapshot};
pub use failed::FailedEndpoints;
pub use selector::EndpointSelector;
