//! Batch execution tests


use super::ItemOutcome;
use crate::core::selector::EndpointSelector;
use crate::utils::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// One recorded remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Call {
    pub endpoint: String,
    pub keys: Vec<String>,
}

pub(super) type CallLog = Arc<Mutex<Vec<Call>>>;

/// Build an action answering with `respond` and logging every call
pub(super) fn recording_action<F>(
    respond: F,
) -> (
    impl Fn(String, Vec<String>) -> futures::future::Ready<Result<Vec<ItemOutcome>>>
    + Send
    + Sync
    + 'static,
    CallLog,
)
where
    F: Fn(&str, &[String]) -> Result<Vec<ItemOutcome>> + Send + Sync + 'static,
{
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let calls = log.clone();
    let action = move |endpoint: String, keys: Vec<String>| {
        let result = respond(&endpoint, &keys);
        calls.lock().push(Call { endpoint, keys });
        futures::future::ready(result)
    };
    (action, log)
}

pub(super) fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub(super) fn numbered_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key-{:04}", i)).collect()
}

pub(super) fn selector(hosts: &[&str]) -> Arc<EndpointSelector> {
    Arc::new(EndpointSelector::round_robin(hosts.iter().copied()).unwrap())
}

pub(super) fn all_ok(keys: &[String]) -> Result<Vec<ItemOutcome>> {
    Ok(keys.iter().map(|_| ItemOutcome::ok()).collect())
}
