//! Policy evaluator unit tests.
//!
//! Verifies the extremal selections and the full deterministic tie-break
//! chains with constructed histories containing exact ties.

use pretty_assertions::assert_eq;

use pagesim_core::config::Policy;
use pagesim_core::history::{PageId, UsageHistory};
use pagesim_core::policy::{self, lfu, lru, mru};

fn page(id: &str) -> PageId {
    PageId::parse(id).expect("valid page id")
}

fn pages(ids: &[&str]) -> Vec<PageId> {
    ids.iter().map(|id| page(id)).collect()
}

/// Builds a history where each page has been accessed `frequency` times
/// with the given final timestamp.
fn history_of(entries: &[(&str, u64, u64)]) -> UsageHistory {
    let mut history = UsageHistory::new();
    for &(id, frequency, last_used) in entries {
        let p = page(id);
        for _ in 1..frequency {
            history.record_access(&p, 1);
        }
        history.record_access(&p, last_used);
    }
    history
}

#[test]
fn lru_selects_minimum_last_used() {
    let cache = pages(&["A", "B", "C"]);
    let history = history_of(&[("A", 1, 30), ("B", 1, 10), ("C", 1, 20)]);
    assert_eq!(lru::select(&cache, &history), page("B"));
}

#[test]
fn lru_tie_breaks_by_cache_order() {
    let cache = pages(&["X", "Y", "Z"]);
    // X and Y share the minimum timestamp exactly.
    let history = history_of(&[("X", 1, 5), ("Y", 1, 5), ("Z", 1, 9)]);
    assert_eq!(lru::select(&cache, &history), page("X"));
}

#[test]
fn lru_prefers_pages_absent_from_history() {
    let cache = pages(&["A", "B", "C"]);
    // B never recorded: counts as last_used 0, infinitely old.
    let history = history_of(&[("A", 1, 3), ("C", 1, 7)]);
    assert_eq!(lru::select(&cache, &history), page("B"));
}

#[test]
fn mru_selects_maximum_last_used() {
    let cache = pages(&["A", "B", "C"]);
    let history = history_of(&[("A", 1, 30), ("B", 1, 10), ("C", 1, 20)]);
    assert_eq!(mru::select(&cache, &history), page("A"));
}

#[test]
fn mru_tie_breaks_by_cache_order() {
    let cache = pages(&["X", "Y", "Z"]);
    // X and Y share the maximum timestamp exactly.
    let history = history_of(&[("X", 1, 9), ("Y", 1, 9), ("Z", 1, 2)]);
    assert_eq!(mru::select(&cache, &history), page("X"));
}

#[test]
fn lfu_selects_minimum_frequency() {
    let cache = pages(&["A", "B", "C"]);
    let history = history_of(&[("A", 3, 10), ("B", 1, 20), ("C", 2, 5)]);
    assert_eq!(lfu::select(&cache, &history), page("B"));
}

#[test]
fn lfu_frequency_tie_breaks_by_last_used() {
    let cache = pages(&["A", "B", "C"]);
    // A and C tie on frequency; C is older.
    let history = history_of(&[("A", 1, 20), ("B", 2, 5), ("C", 1, 10)]);
    assert_eq!(lfu::select(&cache, &history), page("C"));
}

#[test]
fn lfu_three_way_tie_resolves_by_cache_order() {
    let cache = pages(&["P", "Q", "R"]);
    // Identical frequency and identical last_used: full tie chain down to
    // cache slot order.
    let history = history_of(&[("P", 2, 8), ("Q", 2, 8), ("R", 2, 8)]);
    assert_eq!(lfu::select(&cache, &history), page("P"));
}

#[test]
fn lfu_prefers_pages_absent_from_history() {
    let cache = pages(&["A", "B"]);
    let history = history_of(&[("A", 1, 1)]);
    assert_eq!(lfu::select(&cache, &history), page("B"));
}

#[test]
fn evaluate_dispatches_per_policy() {
    let cache = pages(&["A", "B", "C"]);
    let history = history_of(&[("A", 3, 30), ("B", 1, 10), ("C", 2, 20)]);

    assert_eq!(policy::evaluate(Policy::Lru, &cache, &history), page("B"));
    assert_eq!(policy::evaluate(Policy::Mru, &cache, &history), page("A"));
    assert_eq!(policy::evaluate(Policy::Lfu, &cache, &history), page("B"));
    // MlServer has no local evaluator; dispatch degrades to LRU.
    assert_eq!(
        policy::evaluate(Policy::MlServer, &cache, &history),
        page("B")
    );
}
