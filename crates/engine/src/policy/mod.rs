//! Eviction Policy Evaluators.
//!
//! Implements the local algorithms for selecting a victim page from a full
//! cache. Each evaluator is a pure function over the current cache contents
//! and a read-only view of the usage history.
//!
//! # Policies
//!
//! - `lru`: Least Recently Used.
//! - `mru`: Most Recently Used.
//! - `lfu`: Least Frequently Used (also the remote-predictor fallback).
//!
//! # Contract
//!
//! Evaluators are called only when the cache is at capacity, so the slice is
//! never empty. Ties are broken by the first page encountered in cache slot
//! order, which keeps every selection deterministic. A cached page with no
//! history record counts as `{frequency: 0, last_used: 0}` — the oldest and
//! least-frequent possible value — so unseen pages are always preferred
//! victims.

/// Least Recently Used evaluator.
pub mod lru;

/// Most Recently Used evaluator.
pub mod mru;

/// Least Frequently Used evaluator.
pub mod lfu;

use crate::config::Policy;
use crate::history::{PageId, UsageHistory};

/// Runs the local evaluator for `policy` against the cache contents.
///
/// `MlServer` has no local evaluator; the controller routes it through the
/// predictor adapter instead, so it falls through to the LRU default here
/// exactly like an unrecognized selector would.
///
/// # Panics
///
/// Never panics on a non-empty `cache`; an empty slice violates the caller
/// contract.
pub fn evaluate(policy: Policy, cache: &[PageId], history: &UsageHistory) -> PageId {
    match policy {
        Policy::Mru => mru::select(cache, history),
        Policy::Lfu => lfu::select(cache, history),
        Policy::Lru | Policy::MlServer => lru::select(cache, history),
    }
}
