//! Least Frequently Used (LFU) eviction evaluator.
//!
//! Selects the cached page with the minimum access frequency. LFU doubles
//! as the mandatory local fallback when the remote predictor fails: it is
//! always computable on a non-empty cache, which is what guarantees the
//! simulation can never stall on a misbehaving external service.
//!
//! # Tie-break chain
//!
//! 1. Minimum `frequency`.
//! 2. Among frequency ties, minimum `last_used`.
//! 3. Among full ties, the first page encountered in cache slot order.

use crate::history::{PageId, UsageHistory};

/// Selects the least frequently used page from a full cache.
///
/// # Panics
///
/// Panics if `cache` is empty; callers guarantee the cache is at capacity.
pub fn select(cache: &[PageId], history: &UsageHistory) -> PageId {
    let mut victim = &cache[0];
    let first = history.get(victim);
    let mut lowest_freq = first.frequency;
    let mut oldest = first.last_used;

    for page in &cache[1..] {
        let record = history.get(page);
        if record.frequency < lowest_freq
            || (record.frequency == lowest_freq && record.last_used < oldest)
        {
            lowest_freq = record.frequency;
            oldest = record.last_used;
            victim = page;
        }
    }
    victim.clone()
}
