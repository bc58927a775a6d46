//! Predictor adapter unit tests.
//!
//! Verifies feature extraction (elapsed times, recency ranks, fingerprint)
//! and the wire-format field names the remote service expects.

use pretty_assertions::assert_eq;

use pagesim_core::history::{PageId, UsageHistory};
use pagesim_core::predictor::{PredictResponse, build_request};

fn page(id: &str) -> PageId {
    PageId::parse(id).expect("valid page id")
}

fn pages(ids: &[&str]) -> Vec<PageId> {
    ids.iter().map(|id| page(id)).collect()
}

#[test]
fn build_request_computes_elapsed_and_counts() {
    let cache = pages(&["A", "B"]);
    let mut history = UsageHistory::new();
    history.record_access(&page("A"), 10);
    history.record_access(&page("A"), 40);
    history.record_access(&page("B"), 25);

    let request = build_request(&cache, &history, 100);

    assert_eq!(request.page_ids, cache);
    assert_eq!(request.pages.len(), 2);
    assert_eq!(request.pages[0].last_access_time, 60);
    assert_eq!(request.pages[0].access_count, 2);
    assert_eq!(request.pages[1].last_access_time, 75);
    assert_eq!(request.pages[1].access_count, 1);
}

#[test]
fn build_request_ranks_by_recency() {
    let cache = pages(&["A", "B", "C"]);
    let mut history = UsageHistory::new();
    history.record_access(&page("A"), 5);
    history.record_access(&page("B"), 50);
    history.record_access(&page("C"), 20);

    let request = build_request(&cache, &history, 60);

    // 1 = most recent: B, then C, then A.
    assert_eq!(request.pages[0].recency_rank, 3);
    assert_eq!(request.pages[1].recency_rank, 1);
    assert_eq!(request.pages[2].recency_rank, 2);
}

#[test]
fn build_request_rank_ties_keep_cache_order() {
    let cache = pages(&["A", "B", "C"]);
    let mut history = UsageHistory::new();
    history.record_access(&page("A"), 7);
    history.record_access(&page("B"), 7);
    history.record_access(&page("C"), 7);

    let request = build_request(&cache, &history, 10);

    assert_eq!(request.pages[0].recency_rank, 1);
    assert_eq!(request.pages[1].recency_rank, 2);
    assert_eq!(request.pages[2].recency_rank, 3);
}

#[test]
fn build_request_handles_never_used_pages() {
    let cache = pages(&["A"]);
    let history = UsageHistory::new();

    let request = build_request(&cache, &history, 1234);

    // last_used 0 yields an elapsed time of roughly "now".
    assert_eq!(request.pages[0].last_access_time, 1234);
    assert_eq!(request.pages[0].access_count, 0);
    assert_eq!(request.pages[0].access_type, 0);
    assert_eq!(request.pages[0].recency_rank, 1);
}

#[test]
fn build_request_carries_fingerprints() {
    let cache = pages(&["7", "A"]);
    let history = UsageHistory::new();

    let request = build_request(&cache, &history, 1);

    assert_eq!(request.pages[0].cache_item, 7);
    assert_eq!(request.pages[1].cache_item, 65);
}

#[test]
fn request_serializes_with_service_field_names() {
    let cache = pages(&["A"]);
    let mut history = UsageHistory::new();
    history.record_access(&page("A"), 4);

    let request = build_request(&cache, &history, 10);
    let value = serde_json::to_value(&request).expect("serializable");

    assert_eq!(value["pageIds"][0], "A");
    let features = &value["pages"][0];
    assert_eq!(features["last_access_time"], 6);
    assert_eq!(features["access_count"], 1);
    assert_eq!(features["recency_rank"], 1);
    assert_eq!(features["access_type"], 0);
    assert_eq!(features["cache_item"], 65);
}

#[test]
fn response_decodes_eviction_choice() {
    let response: PredictResponse =
        serde_json::from_str(r#"{"evict": "B"}"#).expect("decodable");
    assert_eq!(response.evict.as_deref(), Some("B"));
}

#[test]
fn response_tolerates_missing_choice_field() {
    // A shape mismatch must surface as MissingChoice downstream, not as a
    // decode panic.
    let response: PredictResponse = serde_json::from_str("{}").expect("decodable");
    assert_eq!(response.evict, None);
}
