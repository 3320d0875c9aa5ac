//! Selection strategy implementations
//!
//! Each function receives a non-empty candidate list already filtered against
//! the excluded set.

use super::endpoint::Endpoint;
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};

/// Round-robin selection over the candidates
pub fn round_robin<'a>(candidates: &[&'a Endpoint], counter: &AtomicUsize) -> &'a Endpoint {
    if candidates.len() == 1 {
        return candidates[0];
    }

    let index = counter.fetch_add(1, Relaxed) % candidates.len();
    candidates[index]
}

/// Weighted random selection
///
/// Higher weight = higher probability of selection. All-zero weights fall back
/// to a uniform choice.
pub fn weighted_random<'a>(candidates: &[&'a Endpoint]) -> &'a Endpoint {
    if candidates.len() == 1 {
        return candidates[0];
    }

    let total_weight: u64 = candidates.iter().map(|e| u64::from(e.weight)).sum();
    let mut rng = rand::thread_rng();

    if total_weight == 0 {
        return candidates[rng.gen_range(0..candidates.len())];
    }

    let mut point = rng.gen_range(0..total_weight);
    for endpoint in candidates.iter().copied() {
        let weight = u64::from(endpoint.weight);
        if point < weight {
            return endpoint;
        }
        point -= weight;
    }

    candidates[candidates.len() - 1]
}
