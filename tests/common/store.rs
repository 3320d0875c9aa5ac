//! In-memory object store

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use syncdata_rs::{ItemOutcome, ObjectClient, Result, SyncError};

/// Status the store reports for a key that does not exist
pub const NO_SUCH_KEY: u16 = 612;

/// One call received by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedCall {
    pub endpoint: String,
    pub bucket: String,
    pub keys: Vec<String>,
}

/// Object store double with scriptable endpoint and key failures
#[derive(Debug, Default)]
pub struct FakeObjectStore {
    objects: Mutex<HashSet<String>>,
    down: Mutex<HashSet<String>>,
    flaky: Mutex<HashMap<String, u32>>,
    calls: Mutex<Vec<ReceivedCall>>,
}

impl FakeObjectStore {
    pub fn with_objects<I: IntoIterator<Item = String>>(keys: I) -> Self {
        let store = Self::default();
        store.objects.lock().extend(keys);
        store
    }

    /// Every call to `endpoint` fails at the transport level
    pub fn take_down(&self, endpoint: &str) {
        self.down.lock().insert(endpoint.to_string());
    }

    /// `key` answers 503 for its next `times` calls
    pub fn make_flaky(&self, key: &str, times: u32) {
        self.flaky.lock().insert(key.to_string(), times);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.objects.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.lock().is_empty()
    }

    pub fn calls(&self) -> Vec<ReceivedCall> {
        self.calls.lock().clone()
    }

    fn receive(&self, endpoint: &str, bucket: &str, keys: &[String]) -> Result<()> {
        self.calls.lock().push(ReceivedCall {
            endpoint: endpoint.to_string(),
            bucket: bucket.to_string(),
            keys: keys.to_vec(),
        });
        if self.down.lock().contains(endpoint) {
            return Err(SyncError::transport(endpoint, "connection refused"));
        }
        Ok(())
    }

    fn transient(&self, key: &str) -> bool {
        let mut flaky = self.flaky.lock();
        match flaky.get_mut(key) {
            Some(left) if *left > 0 => {
                *left -= 1;
                true
            }
            _ => false,
        }
    }
}

#[async_trait]
impl ObjectClient for FakeObjectStore {
    async fn batch_delete(
        &self,
        endpoint: &str,
        bucket: &str,
        keys: &[String],
    ) -> Result<Vec<ItemOutcome>> {
        self.receive(endpoint, bucket, keys)?;
        Ok(keys
            .iter()
            .map(|key| {
                if self.transient(key) {
                    ItemOutcome::failed(503, "service unavailable")
                } else if self.objects.lock().remove(key) {
                    ItemOutcome::ok()
                } else {
                    ItemOutcome::failed(NO_SUCH_KEY, "no such file or directory")
                }
            })
            .collect())
    }

    async fn batch_stat(
        &self,
        endpoint: &str,
        bucket: &str,
        keys: &[String],
    ) -> Result<Vec<ItemOutcome>> {
        self.receive(endpoint, bucket, keys)?;
        Ok(keys
            .iter()
            .map(|key| {
                if self.transient(key) {
                    ItemOutcome::failed(503, "service unavailable")
                } else if self.objects.lock().contains(key) {
                    ItemOutcome::ok()
                } else {
                    ItemOutcome::failed(NO_SUCH_KEY, "no such file or directory")
                }
            })
            .collect())
    }
}
