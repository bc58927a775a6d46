//! Configuration system for the page-cache simulator.
//!
//! This module defines all configuration structures and enums used to
//! parameterize a simulation session. It provides:
//! 1. **Defaults:** Baseline constants (cache capacity, predictor endpoint,
//!    request timeout).
//! 2. **Structures:** Hierarchical config for the cache and the remote
//!    predictor.
//! 3. **Enums:** The eviction policy selector.
//!
//! Configuration is supplied via JSON or built with `Config::default()` for
//! the CLI.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline session configuration when not
/// explicitly overridden.
mod defaults {
    /// Number of page slots in the simulated cache.
    ///
    /// Capacity is deliberately tiny (the cache is scanned linearly on
    /// every request), matching the interactive nature of the tool.
    pub const CAPACITY: usize = 4;

    /// Endpoint of the remote eviction predictor service.
    pub const PREDICTOR_URL: &str = "http://127.0.0.1:5000/predict-evict";

    /// Predictor request timeout in milliseconds.
    ///
    /// Expiry is treated as a predictor failure and resolved through the
    /// LFU fallback; the simulation never waits indefinitely.
    pub const PREDICTOR_TIMEOUT_MS: u64 = 3_000;

    /// Returns the default cache capacity.
    pub fn capacity() -> usize {
        CAPACITY
    }

    /// Returns the default predictor endpoint.
    pub fn predictor_url() -> String {
        PREDICTOR_URL.to_string()
    }

    /// Returns the default predictor timeout.
    pub fn predictor_timeout_ms() -> u64 {
        PREDICTOR_TIMEOUT_MS
    }
}

/// Eviction policy selector.
///
/// Specifies the algorithm used to select which resident page to evict when
/// the cache is full and a new page must be admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Policy {
    /// Least Recently Used.
    ///
    /// Evicts the resident page with the oldest access timestamp.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// Most Recently Used.
    ///
    /// Evicts the resident page with the newest access timestamp.
    /// Effective for cyclic access patterns larger than the cache.
    #[serde(alias = "Mru")]
    Mru,
    /// Least Frequently Used.
    ///
    /// Evicts the resident page with the lowest access count. Also the
    /// mandatory local fallback when the remote predictor fails.
    #[serde(alias = "Lfu")]
    Lfu,
    /// Remote ML predictor.
    ///
    /// Delegates the decision to an external service; its answer is
    /// advisory and validated before use.
    #[serde(rename = "ML_SERVER", alias = "MlServer")]
    MlServer,
}

impl Policy {
    /// Parses an operator-supplied selector string.
    ///
    /// Matching is case-insensitive. Unrecognized or empty selectors fall
    /// back to [`Policy::Lru`], so a stale selector value can never stall a
    /// session.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_uppercase().as_str() {
            "MRU" => Self::Mru,
            "LFU" => Self::Lfu,
            "ML_SERVER" | "MLSERVER" | "ML" => Self::MlServer,
            _ => Self::Lru,
        }
    }

    /// Returns the canonical selector spelling for display.
    pub fn selector(self) -> &'static str {
        match self {
            Self::Lru => "LRU",
            Self::Mru => "MRU",
            Self::Lfu => "LFU",
            Self::MlServer => "ML_SERVER",
        }
    }
}

/// Remote predictor connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictorConfig {
    /// Endpoint URL of the prediction service.
    #[serde(default = "defaults::predictor_url")]
    pub url: String,
    /// Request timeout in milliseconds; expiry counts as predictor failure.
    #[serde(default = "defaults::predictor_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for PredictorConfig {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            url: defaults::predictor_url(),
            timeout_ms: defaults::predictor_timeout_ms(),
        }
    }
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use pagesim_core::config::{Config, Policy};
///
/// let config = Config::default();
/// assert_eq!(config.capacity, 4);
/// assert_eq!(config.policy, Policy::Lru);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use pagesim_core::config::{Config, Policy};
///
/// let json = r#"{
///     "capacity": 8,
///     "policy": "ML_SERVER",
///     "predictor": { "url": "http://localhost:5000/predict-evict", "timeout_ms": 1000 }
/// }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.capacity, 8);
/// assert_eq!(config.policy, Policy::MlServer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Number of page slots in the cache.
    #[serde(default = "defaults::capacity")]
    pub capacity: usize,
    /// Active eviction policy.
    #[serde(default)]
    pub policy: Policy,
    /// Remote predictor settings (used when `policy` is `ML_SERVER`).
    #[serde(default)]
    pub predictor: PredictorConfig,
}

impl Default for Config {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            capacity: defaults::capacity(),
            policy: Policy::default(),
            predictor: PredictorConfig::default(),
        }
    }
}
