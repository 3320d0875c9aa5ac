//! Order-preserving batch partitioning

use super::types::Batch;
use crate::utils::error::{Result, SyncError};

/// Splits a key list into contiguous batches of a fixed size
#[derive(Debug, Clone, Copy)]
pub struct BatchPartitioner {
    batch_size: usize,
}

impl BatchPartitioner {
    pub fn new(batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(SyncError::validation("Batch size must be greater than 0"));
        }
        Ok(Self { batch_size })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches `total` keys split into
    pub fn batch_count(&self, total: usize) -> usize {
        total.div_ceil(self.batch_size)
    }

    /// Contiguous batches; the last one may be shorter
    pub fn partition<'a>(&self, keys: &'a [String]) -> Vec<Batch<'a>> {
        keys.chunks(self.batch_size)
            .enumerate()
            .map(|(index, keys)| Batch {
                keys,
                base_offset: index * self.batch_size,
            })
            .collect()
    }
}
