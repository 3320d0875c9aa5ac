//! Remote batch action abstraction

use super::types::ItemOutcome;
use crate::core::selector::EndpointId;
use crate::utils::error::Result;
use futures::future::BoxFuture;
use std::future::Future;

/// A remote call applied to one batch of keys against one endpoint
///
/// Implementations return one outcome per key, in key order. Transport-level
/// failures are returned as `Err` and may be retried against another endpoint.
pub trait BatchAction: Send + Sync + 'static {
    fn call(
        &self,
        endpoint: EndpointId,
        keys: Vec<String>,
    ) -> BoxFuture<'static, Result<Vec<ItemOutcome>>>;
}

impl<F, Fut> BatchAction for F
where
    F: Fn(EndpointId, Vec<String>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<ItemOutcome>>> + Send + 'static,
{
    fn call(
        &self,
        endpoint: EndpointId,
        keys: Vec<String>,
    ) -> BoxFuture<'static, Result<Vec<ItemOutcome>>> {
        Box::pin(self(endpoint, keys))
    }
}
