//! Batch executor integration tests

#[cfg(test)]
mod tests {
    use crate::common::{OutcomeAssertions, fixtures};
    use parking_lot::Mutex;
    use rand::Rng;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use syncdata_rs::core::selector::Endpoint;
    use syncdata_rs::{
        BatchOptions, BatchRetryExecutor, EndpointSelector, ItemOutcome, SelectionStrategy,
        SyncError, WorkerPool, batch_retry,
    };
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn test_batch_retry_over_weighted_endpoints() {
        let per_endpoint: Arc<Mutex<HashMap<String, usize>>> = Arc::default();
        let seen = per_endpoint.clone();
        let action = move |endpoint: String, keys: Vec<String>| {
            *seen.lock().entry(endpoint).or_default() += 1;
            async move { Ok::<_, SyncError>(keys.iter().map(|_| ItemOutcome::ok()).collect()) }
        };

        let selector = Arc::new(
            EndpointSelector::new(
                vec![
                    Endpoint::new("heavy").with_weight(50),
                    Endpoint::new("light").with_weight(1),
                ],
                SelectionStrategy::Weighted,
            )
            .unwrap(),
        );

        let keys = fixtures::keys(2000);
        let results = batch_retry(&keys, 0, action, 1, 10, 8, selector).await.unwrap();

        results.assert_all_success();
        let counts = per_endpoint.lock();
        let heavy = counts.get("heavy").copied().unwrap_or(0);
        let light = counts.get("light").copied().unwrap_or(0);
        assert_eq!(heavy + light, 200);
        assert!(heavy > light);
    }

    #[tokio::test]
    async fn test_results_align_with_input_under_jitter() {
        let action = |_endpoint: String, keys: Vec<String>| async move {
            let jitter = rand::thread_rng().gen_range(0..15);
            tokio::time::sleep(Duration::from_millis(jitter)).await;
            Ok::<_, SyncError>(
                keys.iter()
                    .map(|key| {
                        if key.ends_with("3.tar") {
                            ItemOutcome::failed(404, key.clone())
                        } else {
                            ItemOutcome::ok()
                        }
                    })
                    .collect(),
            )
        };

        let keys = fixtures::keys(300);
        let executor = BatchRetryExecutor::new(
            Arc::new(action),
            Arc::new(EndpointSelector::round_robin(["rs1", "rs2"]).unwrap()),
            BatchOptions::new().with_batch_size(7).with_batch_concurrency(6),
        )
        .unwrap();
        let results = executor.run(&keys, &CancellationToken::new()).await.unwrap();

        for (key, outcome) in keys.iter().zip(&results) {
            match outcome.error() {
                Some(err) => {
                    assert!(key.ends_with("3.tar"));
                    assert_eq!(&err.key, key);
                    assert_eq!(&err.error, key);
                }
                None => assert!(!key.ends_with("3.tar")),
            }
        }
    }

    #[tokio::test]
    async fn test_pool_instrumentation_bounds_concurrency() {
        let concurrency = WorkerPool::concurrency_for(1000, 50, 5);
        assert_eq!(concurrency, 5);

        let mut pool = WorkerPool::new(concurrency, &CancellationToken::new());
        let stats = pool.stats();
        let done = Arc::new(AtomicUsize::new(0));

        for _ in 0..20 {
            let done = done.clone();
            pool.submit(move |_| async move {
                tokio::time::sleep(Duration::from_millis(2)).await;
                done.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .await
            .unwrap();
        }
        pool.wait().await.unwrap();

        assert_eq!(done.load(Ordering::SeqCst), 20);
        assert_eq!(stats.completed(), 20);
        assert!(stats.peak() <= 5);
    }

    #[tokio::test]
    async fn test_every_endpoint_failing_aborts() {
        let action = |endpoint: String, _keys: Vec<String>| async move {
            Err::<Vec<ItemOutcome>, _>(SyncError::transport(endpoint, "no route to host"))
        };

        let keys = fixtures::keys(5);
        let selector = Arc::new(EndpointSelector::round_robin(["rs1", "rs2"]).unwrap());
        let err = batch_retry(&keys, 3, action, 3, 5, 1, selector.clone())
            .await
            .unwrap_err();

        assert!(err.is_fatal());
        assert!(!err.is_cancelled());
        let failures: u64 = selector
            .health_snapshot()
            .iter()
            .map(|(_, health)| health.failures)
            .sum();
        assert_eq!(failures, 3);
    }
}
