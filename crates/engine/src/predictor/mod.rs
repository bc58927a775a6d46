//! Remote eviction predictor adapter.
//!
//! This module defines the interface to the external ML eviction service.
//! It provides:
//! 1. **Wire types:** The feature payload sent per cached page and the
//!    response shape (field names are fixed by the service protocol).
//! 2. **Feature extraction:** `build_request` computes the feature tuple
//!    for every resident page against a single clock reading.
//! 3. **Seam:** The `EvictionPredictor` trait, so the controller and tests
//!    can substitute scripted predictors for the HTTP client.
//! 4. **Errors:** The predictor failure taxonomy. Every variant resolves
//!    to the same outcome — the controller falls back to the local LFU
//!    evaluator — so no predictor failure is ever fatal.

/// Blocking HTTP implementation of the predictor interface.
pub mod remote;

pub use remote::RemotePredictor;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::{PageId, UsageHistory};

/// Feature tuple describing one resident page.
///
/// Field names match the prediction service's expected JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFeatures {
    /// Milliseconds since the page was last accessed. A page that was
    /// never stamped (`last_used == 0`) yields roughly "now".
    pub last_access_time: u64,
    /// Total access count for the page.
    pub access_count: u64,
    /// Recency rank: 1 = most recently used among resident pages.
    pub recency_rank: usize,
    /// Reserved categorical field; 0 when absent from history.
    pub access_type: u32,
    /// Numeric fingerprint of the page identifier.
    pub cache_item: i64,
}

/// Request payload for the prediction service.
///
/// `pages[i]` describes `page_ids[i]`; the two lists are parallel and in
/// cache slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictRequest {
    /// Feature tuples for every resident page.
    pub pages: Vec<PageFeatures>,
    /// Identifiers of the resident pages, parallel to `pages`.
    #[serde(rename = "pageIds")]
    pub page_ids: Vec<PageId>,
}

/// Successful response from the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictResponse {
    /// Identifier of the page the model chose to evict.
    #[serde(default)]
    pub evict: Option<String>,
}

/// Ways a predictor consultation can fail.
///
/// All variants are recoverable: the controller resolves each one through
/// the deterministic LFU fallback and surfaces it only as a log event.
#[derive(Debug, Error)]
pub enum PredictorError {
    /// Network or transport failure, including request timeout and an
    /// undecodable response body.
    #[error("predictor transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// Service answered with a non-success HTTP status.
    #[error("predictor returned status {0}")]
    Status(u16),
    /// Well-formed response missing a usable eviction choice.
    #[error("predictor response contained no eviction choice")]
    MissingChoice,
}

/// Interface to an eviction decision service.
///
/// The returned page identifier is advisory: the controller still validates
/// cache membership and applies the slot-0 failsafe if the choice is stale
/// or foreign. Implementations must not panic on service misbehavior.
pub trait EvictionPredictor: Send {
    /// Asks the service which resident page to evict.
    fn predict(&self, request: &PredictRequest) -> Result<PageId, PredictorError>;
}

/// Builds the feature payload for the current cache contents.
///
/// All elapsed times and recency ranks are computed against the single
/// `now_ms` reading. Ranks come from a stable descending sort by
/// `last_used`, so pages with identical timestamps keep their cache slot
/// order.
pub fn build_request(cache: &[PageId], history: &UsageHistory, now_ms: u64) -> PredictRequest {
    let mut by_recency: Vec<(usize, u64)> = cache
        .iter()
        .enumerate()
        .map(|(slot, page)| (slot, history.get(page).last_used))
        .collect();
    by_recency.sort_by(|a, b| b.1.cmp(&a.1));

    let mut ranks = vec![0usize; cache.len()];
    for (rank, (slot, _)) in by_recency.iter().enumerate() {
        ranks[*slot] = rank + 1;
    }

    let pages = cache
        .iter()
        .zip(&ranks)
        .map(|(page, &rank)| {
            let record = history.get(page);
            PageFeatures {
                last_access_time: now_ms.saturating_sub(record.last_used),
                access_count: record.frequency,
                recency_rank: rank,
                access_type: 0,
                cache_item: page.fingerprint(),
            }
        })
        .collect();

    PredictRequest {
        pages,
        page_ids: cache.to_vec(),
    }
}
