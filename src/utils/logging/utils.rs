use crate::config::LoggingConfig;
use crate::utils::error::{Result, SyncError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Install the global subscriber described by `config`.
    ///
    /// `RUST_LOG` wins over the configured level when set. Calling this again
    /// after a subscriber is installed leaves the existing one in place.
    pub fn init_logger(config: &LoggingConfig) -> Result<()> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(config.level.as_str())
                .map_err(|e| SyncError::config(format!("Invalid log filter: {}", e)))?,
        };

        let installed = if config.json {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(config.with_target)
                .with_thread_ids(config.with_thread_ids)
                .try_init()
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(config.with_target)
                .with_thread_ids(config.with_thread_ids)
                .try_init()
        };

        if installed.is_err() {
            debug!("Global tracing subscriber already installed, keeping it");
        }

        Ok(())
    }

    pub fn format_duration(duration: std::time::Duration) -> String {
        let total_ms = duration.as_millis();

        if total_ms < 1000 {
            format!("{}ms", total_ms)
        } else if total_ms < 60_000 {
            format!("{:.2}s", total_ms as f64 / 1000.0)
        } else {
            let minutes = total_ms / 60_000;
            let seconds = (total_ms % 60_000) as f64 / 1000.0;
            format!("{}m {:.2}s", minutes, seconds)
        }
    }
}
