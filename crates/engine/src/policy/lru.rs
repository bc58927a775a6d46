//! Least Recently Used (LRU) eviction evaluator.
//!
//! Selects the cached page with the minimum `last_used` timestamp — the
//! page that has gone longest without an access. A page that was inserted
//! but never stamped (`last_used == 0`) sorts as infinitely old and is
//! therefore selected first.
//!
//! # Determinism
//!
//! The scan uses a strict `<` comparison in cache slot order, so an exact
//! timestamp tie resolves to the first such page encountered.

use crate::history::{PageId, UsageHistory};

/// Selects the least recently used page from a full cache.
///
/// # Panics
///
/// Panics if `cache` is empty; callers guarantee the cache is at capacity.
pub fn select(cache: &[PageId], history: &UsageHistory) -> PageId {
    let mut victim = &cache[0];
    let mut oldest = history.get(victim).last_used;
    for page in &cache[1..] {
        let last_used = history.get(page).last_used;
        if last_used < oldest {
            oldest = last_used;
            victim = page;
        }
    }
    victim.clone()
}
