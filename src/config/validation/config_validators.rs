//! Configuration validators
//!
//! Validation implementations for the host list, batch settings and the
//! application name embedded in the user agent.

use super::trait_def::Validate;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::debug;

impl Validate for HostsConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating hosts configuration");

        if self.rs_hosts.is_empty() {
            return Err("At least one rs host must be configured".to_string());
        }

        let mut seen = HashSet::with_capacity(self.rs_hosts.len());
        for host in &self.rs_hosts {
            if host.trim().is_empty() {
                return Err("Rs host entries cannot be empty".to_string());
            }
            if !seen.insert(host.as_str()) {
                return Err(format!("Duplicate rs host: {}", host));
            }
        }

        for (host, weight) in &self.weights {
            if !seen.contains(host.as_str()) {
                return Err(format!("Weight configured for unknown host: {}", host));
            }
            if *weight == 0 {
                return Err(format!("Weight for host {} must be greater than 0", host));
            }
        }

        Ok(())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating batch configuration");

        if self.batch_size == 0 {
            return Err("Batch size must be greater than 0".to_string());
        }

        if self.batch_concurrency == 0 {
            return Err("Batch concurrency must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Application names may only contain `[A-Za-z0-9_ \-.]`
pub fn validate_app_name(app_name: &str) -> Result<(), String> {
    let valid = app_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(format!("Invalid app name: {:?}", app_name))
    }
}
