//! Page identifiers and the per-page usage-history ledger.
//!
//! This module provides:
//! 1. **`PageId`:** Opaque, case-normalized page identifier with a derived
//!    numeric fingerprint for the predictor feature payload.
//! 2. **`UsageRecord`:** Per-page access count and last-used timestamp.
//! 3. **`UsageHistory`:** The history store. Records are lazily
//!    materialized on first access and never deleted — history outlives
//!    eviction from the cache.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Opaque identifier of a cacheable page.
///
/// Construction goes through [`PageId::parse`], which trims surrounding
/// whitespace and uppercases the input so that `"a "` and `"A"` name the
/// same page. Equality is exact string match on the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Normalizes and validates a raw page identifier.
    ///
    /// Returns `None` if the identifier is empty after trimming; an empty
    /// request must abort with no state change.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// Returns the normalized identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the numeric `cache_item` feature for the predictor payload.
    ///
    /// An identifier that parses as an integer is used verbatim. Anything
    /// else is reduced to a bounded, stable non-negative value with a
    /// 32-bit rolling hash (`h = h * 31 + byte`, wrapping) taken modulo
    /// 1000.
    pub fn fingerprint(&self) -> i64 {
        if let Ok(n) = self.0.parse::<i64>() {
            return n;
        }
        let mut hash: u32 = 0;
        for byte in self.0.bytes() {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        i64::from(hash % 1000)
    }
}

impl fmt::Display for PageId {
    /// Formats the identifier for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recency/frequency ledger entry for a single page.
///
/// `frequency` counts every access event (hit or miss-insert) and never
/// decreases. `last_used` is a monotonic-clock reading in milliseconds;
/// `0` means the page has never been stamped and sorts as infinitely old.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsageRecord {
    /// Total number of accesses observed for this page.
    pub frequency: u64,
    /// Timestamp of the most recent access, `0` if never accessed.
    pub last_used: u64,
}

/// Mapping from page identifier to its usage record.
///
/// Owned exclusively by the cache controller; policy evaluators and the
/// predictor adapter receive read-only views. Insertion order is
/// irrelevant — eviction order comes from the records, with cache slot
/// order as the deterministic tie-break.
#[derive(Debug, Default)]
pub struct UsageHistory {
    records: HashMap<PageId, UsageRecord>,
}

impl UsageHistory {
    /// Creates an empty history store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one access event for `page` at the given timestamp.
    ///
    /// A missing record is lazily materialized at zero, then the frequency
    /// is incremented by exactly 1 and `last_used` is stamped. Every call
    /// is a real event; there is no idempotency and no error condition.
    pub fn record_access(&mut self, page: &PageId, now_ms: u64) {
        let record = self.records.entry(page.clone()).or_default();
        record.frequency += 1;
        record.last_used = now_ms;
    }

    /// Returns the record for `page`, or the zero-valued default if the
    /// page has never been seen. Reads never fail.
    pub fn get(&self, page: &PageId) -> UsageRecord {
        self.records.get(page).copied().unwrap_or_default()
    }

    /// Returns the number of distinct pages ever seen this session.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no page has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
