//! Endpoint host configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Candidate endpoints for the object store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostsConfig {
    /// Ordered resource-service endpoints used for batch calls
    #[serde(default)]
    pub rs_hosts: Vec<String>,
    /// Optional per-endpoint weights for weighted selection
    #[serde(default)]
    pub weights: HashMap<String, u32>,
}

impl HostsConfig {
    /// Create a hosts configuration from an ordered endpoint list
    pub fn new<I, S>(rs_hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rs_hosts: rs_hosts.into_iter().map(Into::into).collect(),
            weights: HashMap::new(),
        }
    }

    /// Weight configured for `host`, falling back to the default weight
    pub fn weight_of(&self, host: &str) -> u32 {
        self.weights.get(host).copied().unwrap_or_else(default_weight)
    }

    /// Merge host configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if !other.rs_hosts.is_empty() {
            self.rs_hosts = other.rs_hosts;
        }
        self.weights.extend(other.weights);
        self
    }
}

/// Split a comma-separated host list, dropping blank entries
pub fn parse_host_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .collect()
}
