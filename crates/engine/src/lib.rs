//! Page-cache eviction simulator library.
//!
//! This crate implements a fixed-capacity page-cache simulation for comparing
//! eviction policies, with the following subsystems:
//! 1. **History:** Per-page recency/frequency ledger (`UsageHistory`).
//! 2. **Policies:** Pure victim-selection functions for LRU, MRU, and LFU.
//! 3. **Predictor:** Adapter for a remote ML eviction service with strict
//!    response validation and a deterministic LFU fallback.
//! 4. **Controller:** Cache-slot state machine orchestrating hit/miss
//!    handling, eviction validation, and the slot-0 failsafe.
//! 5. **Statistics:** Hit/miss counters and derived hit-rate reporting.

/// Monotonic clock abstraction for access timestamps.
pub mod clock;
/// Simulator configuration (defaults, policy selector, predictor endpoint).
pub mod config;
/// Cache controller state machine (hit/miss handling, eviction, failsafe).
pub mod controller;
/// Simulation log events emitted at each decision point.
pub mod event;
/// Page identifiers and the per-page usage-history ledger.
pub mod history;
/// Eviction policy evaluators (LRU, MRU, LFU).
pub mod policy;
/// Remote eviction predictor adapter (features, wire types, fallback).
pub mod predictor;
/// Hit/miss statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::{Config, Policy};
/// Main simulation type; owns cache slots, history, and statistics.
pub use crate::controller::CacheController;
