//! Per-operation set of endpoints excluded from selection

use super::endpoint::EndpointId;
use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::HashSet;

/// Endpoints that failed during the current top-level operation
///
/// Shared by every batch worker of the operation. Selection reads it under the
/// shared lock; recording a failure takes the exclusive lock. The set only grows.
#[derive(Debug, Default)]
pub struct FailedEndpoints {
    inner: RwLock<HashSet<EndpointId>>,
}

impl FailedEndpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the shared lock for a selection
    pub fn read(&self) -> RwLockReadGuard<'_, HashSet<EndpointId>> {
        self.inner.read()
    }

    /// Exclude `id` for the rest of the operation; returns true when newly added
    pub fn insert(&self, id: &str) -> bool {
        self.inner.write().insert(id.to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().contains(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy of the current members
    pub fn snapshot(&self) -> HashSet<EndpointId> {
        self.inner.read().clone()
    }
}
