//! Batch data types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status code the remote store reports for a successful item
pub const STATUS_OK: u16 = 200;

/// Outcome of one item as reported by a remote batch call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    /// Status code for the item
    pub code: u16,
    /// Error message when the item failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ItemOutcome {
    pub fn ok() -> Self {
        Self {
            code: STATUS_OK,
            error: None,
        }
    }

    pub fn failed(code: u16, error: impl Into<String>) -> Self {
        Self {
            code,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == STATUS_OK
    }
}

/// Per-key failure recorded in the result array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyError {
    /// Key the failure belongs to
    pub key: String,
    /// Error message from the remote store
    pub error: String,
    /// Status code from the remote store
    pub code: u16,
}

impl KeyError {
    /// 5xx failures are transient and get another round
    pub fn is_retryable(&self) -> bool {
        (500..=599).contains(&self.code)
    }
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (code {})", self.key, self.error, self.code)
    }
}

impl std::error::Error for KeyError {}

/// Final outcome for one key of the input list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum KeyOutcome {
    Success,
    Failed(KeyError),
}

impl KeyOutcome {
    /// Build the outcome of `key` from what the remote store reported
    pub fn from_item(key: &str, item: ItemOutcome) -> Self {
        if item.is_success() {
            return KeyOutcome::Success;
        }
        KeyOutcome::Failed(KeyError {
            key: key.to_string(),
            error: item.error.unwrap_or_default(),
            code: item.code,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, KeyOutcome::Success)
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, KeyOutcome::Failed(err) if err.is_retryable())
    }

    pub fn error(&self) -> Option<&KeyError> {
        match self {
            KeyOutcome::Success => None,
            KeyOutcome::Failed(err) => Some(err),
        }
    }
}

/// Summary of a finished batch operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Keys processed
    pub total: usize,
    /// Keys that succeeded
    pub succeeded: usize,
    /// Keys that failed
    pub failed: usize,
    /// Failed keys whose last failure was transient
    pub retryable: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[KeyOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        let retryable = outcomes.iter().filter(|o| o.is_retryable()).count();

        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
            retryable,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// One contiguous slice of a round's keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    /// Keys of the batch, in input order
    pub keys: &'a [String],
    /// Round-local index of the first key
    pub base_offset: usize,
}

impl Batch<'_> {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
