//! Selection strategy configuration

use crate::utils::error::SyncError;
use serde::{Deserialize, Serialize};

/// Selection strategy enumeration
///
/// - **RoundRobin**: Cycle through viable endpoints in configured order (default)
/// - **Weighted**: Weighted random choice among viable endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Simple round-robin selection
    #[default]
    RoundRobin,
    /// Weighted random selection (considers endpoint weights)
    Weighted,
}

impl std::str::FromStr for SelectionStrategy {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "round_robin" | "roundrobin" => Ok(SelectionStrategy::RoundRobin),
            "weighted" => Ok(SelectionStrategy::Weighted),
            other => Err(SyncError::config(format!(
                "Unknown selection strategy: {}",
                other
            ))),
        }
    }
}
