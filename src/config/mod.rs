//! Configuration management for batch operations
//!
//! This module handles loading, validation, and management of the endpoint list
//! and batch execution settings.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Bucket the batch operations run against
    #[serde(default)]
    pub bucket: String,
    /// Application name appended to the user agent
    #[serde(default)]
    pub app_name: String,
    /// Candidate endpoints
    #[serde(default)]
    pub hosts: HostsConfig,
    /// Batch execution settings
    #[serde(default)]
    pub batch: BatchConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SyncError::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| SyncError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// Recognised variables: `SYNCDATA_BUCKET`, `SYNCDATA_APP_NAME`,
    /// `SYNCDATA_RS_HOSTS` (comma separated), `SYNCDATA_RS_HOST` (appended),
    /// `SYNCDATA_BATCH_SIZE`, `SYNCDATA_BATCH_CONCURRENCY`, `SYNCDATA_RETRIES`,
    /// `SYNCDATA_ACTION_MAX_RETRIES`, `SYNCDATA_SELECTION`, `SYNCDATA_LOG_LEVEL`
    /// and `SYNCDATA_LOG_JSON`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(bucket) = lookup("SYNCDATA_BUCKET") {
            config.bucket = bucket;
        }
        if let Some(app_name) = lookup("SYNCDATA_APP_NAME") {
            config.app_name = app_name;
        }

        if let Some(hosts) = lookup("SYNCDATA_RS_HOSTS") {
            config.hosts.rs_hosts = parse_host_list(&hosts);
        }
        if let Some(host) = lookup("SYNCDATA_RS_HOST") {
            let host = host.trim();
            if !host.is_empty() && !config.hosts.rs_hosts.iter().any(|h| h == host) {
                config.hosts.rs_hosts.push(host.to_string());
            }
        }

        if let Some(value) = lookup("SYNCDATA_BATCH_SIZE") {
            config.batch.batch_size = parse_number("SYNCDATA_BATCH_SIZE", &value)?;
        }
        if let Some(value) = lookup("SYNCDATA_BATCH_CONCURRENCY") {
            config.batch.batch_concurrency = parse_number("SYNCDATA_BATCH_CONCURRENCY", &value)?;
        }
        if let Some(value) = lookup("SYNCDATA_RETRIES") {
            config.batch.retries = parse_number("SYNCDATA_RETRIES", &value)?;
        }
        if let Some(value) = lookup("SYNCDATA_ACTION_MAX_RETRIES") {
            config.batch.action_max_retries = parse_number("SYNCDATA_ACTION_MAX_RETRIES", &value)?;
        }
        if let Some(value) = lookup("SYNCDATA_SELECTION") {
            config.batch.selection = value.parse()?;
        }

        if let Some(value) = lookup("SYNCDATA_LOG_LEVEL") {
            config.logging.level = value.parse()?;
        }
        if let Some(value) = lookup("SYNCDATA_LOG_JSON") {
            config.logging.json = matches!(value.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        config.validate()?;
        Ok(config)
    }

    /// Get hosts configuration
    pub fn hosts(&self) -> &HostsConfig {
        &self.hosts
    }

    /// Get batch configuration
    pub fn batch(&self) -> &BatchConfig {
        &self.batch
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// User agent sent along with remote calls
    pub fn user_agent(&self) -> String {
        format!(
            "SyncdataRs/{} ({}; {}; {})",
            crate::VERSION,
            std::env::consts::OS,
            std::env::consts::ARCH,
            self.app_name
        )
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.hosts
            .validate()
            .map_err(|e| SyncError::config(format!("Hosts config error: {}", e)))?;

        self.batch
            .validate()
            .map_err(|e| SyncError::config(format!("Batch config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| SyncError::config(format!("Logging config error: {}", e)))?;

        validation::validate_app_name(&self.app_name).map_err(SyncError::config)?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if !other.bucket.is_empty() {
            self.bucket = other.bucket;
        }
        if !other.app_name.is_empty() {
            self.app_name = other.app_name;
        }
        self.hosts = self.hosts.merge(other.hosts);
        self.batch = self.batch.merge(other.batch);
        self.logging = other.logging;
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SyncError::config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| SyncError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| SyncError::config(format!("Invalid value for {}: {:?}", name, value)))
}
