//! Object store client abstraction

use crate::core::batch::ItemOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;

/// Bulk calls against one endpoint of the object store
///
/// Each call returns one outcome per key, in key order. Transport failures are
/// returned as `Err` so the caller can move to another endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectClient: Send + Sync {
    /// Delete `keys` from `bucket`
    async fn batch_delete(
        &self,
        endpoint: &str,
        bucket: &str,
        keys: &[String],
    ) -> Result<Vec<ItemOutcome>>;

    /// Fetch metadata for `keys` in `bucket`
    async fn batch_stat(
        &self,
        endpoint: &str,
        bucket: &str,
        keys: &[String],
    ) -> Result<Vec<ItemOutcome>>;
}

/// Bulk operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectOperation {
    Delete,
    Stat,
}

impl ObjectOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectOperation::Delete => "delete",
            ObjectOperation::Stat => "stat",
        }
    }
}

impl fmt::Display for ObjectOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
