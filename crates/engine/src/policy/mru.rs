//! Most Recently Used (MRU) eviction evaluator.
//!
//! Selects the cached page with the maximum `last_used` timestamp. While
//! counter-intuitive for typical workloads, MRU is effective for cyclic
//! access patterns where the working set is larger than the cache: the page
//! just touched is the one least likely to be needed again soon.
//!
//! Tie-break mirrors LRU: a strict `>` comparison in cache slot order keeps
//! the first page encountered among exact timestamp ties.

use crate::history::{PageId, UsageHistory};

/// Selects the most recently used page from a full cache.
///
/// # Panics
///
/// Panics if `cache` is empty; callers guarantee the cache is at capacity.
pub fn select(cache: &[PageId], history: &UsageHistory) -> PageId {
    let mut victim = &cache[0];
    let mut newest = history.get(victim).last_used;
    for page in &cache[1..] {
        let last_used = history.get(page).last_used;
        if last_used > newest {
            newest = last_used;
            victim = page;
        }
    }
    victim.clone()
}
