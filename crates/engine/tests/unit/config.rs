//! Configuration unit tests.
//!
//! Verifies defaults, selector parsing leniency, and the serde aliases
//! accepted for the policy enum.

use pretty_assertions::assert_eq;

use pagesim_core::config::{Config, Policy};

#[test]
fn default_config_values() {
    let config = Config::default();
    assert_eq!(config.capacity, 4);
    assert_eq!(config.policy, Policy::Lru);
    assert_eq!(config.predictor.url, "http://127.0.0.1:5000/predict-evict");
    assert_eq!(config.predictor.timeout_ms, 3000);
}

#[test]
fn selector_parsing_is_case_insensitive() {
    assert_eq!(Policy::from_selector("mru"), Policy::Mru);
    assert_eq!(Policy::from_selector("LFU"), Policy::Lfu);
    assert_eq!(Policy::from_selector("ml_server"), Policy::MlServer);
    assert_eq!(Policy::from_selector(" lru "), Policy::Lru);
}

#[test]
fn unrecognized_selector_defaults_to_lru() {
    assert_eq!(Policy::from_selector(""), Policy::Lru);
    assert_eq!(Policy::from_selector("FIFO"), Policy::Lru);
    assert_eq!(Policy::from_selector("random nonsense"), Policy::Lru);
}

#[test]
fn policy_deserializes_with_aliases() {
    assert_eq!(
        serde_json::from_str::<Policy>(r#""ML_SERVER""#).expect("decodable"),
        Policy::MlServer
    );
    assert_eq!(
        serde_json::from_str::<Policy>(r#""Lru""#).expect("decodable"),
        Policy::Lru
    );
    assert_eq!(
        serde_json::from_str::<Policy>(r#""MRU""#).expect("decodable"),
        Policy::Mru
    );
}

#[test]
fn partial_json_fills_defaults() {
    let config: Config = serde_json::from_str(r#"{"capacity": 16}"#).expect("decodable");
    assert_eq!(config.capacity, 16);
    assert_eq!(config.policy, Policy::Lru);
    assert_eq!(config.predictor.timeout_ms, 3000);
}

#[test]
fn selector_round_trips_canonical_spelling() {
    for policy in [Policy::Lru, Policy::Mru, Policy::Lfu, Policy::MlServer] {
        assert_eq!(Policy::from_selector(policy.selector()), policy);
    }
}
