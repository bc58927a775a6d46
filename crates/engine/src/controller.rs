//! Cache controller state machine.
//!
//! The controller owns all mutable simulation state: cache slots, usage
//! history, and statistics. It orchestrates one request at a time:
//! 1. **Intake:** Normalize the identifier; empty input is rejected with no
//!    state change; a request arriving while one is in flight is dropped.
//! 2. **Membership:** Hit bumps the counter and restamps history.
//! 3. **Miss:** Append while below capacity, otherwise consult the active
//!    policy (or the remote predictor) for a victim.
//! 4. **Validation:** A victim not actually resident is a recoverable
//!    policy-contract violation; the controller overwrites slot 0 instead
//!    and records a warning. No policy output can crash or stall the
//!    simulation.

use crate::clock::{Clock, SessionClock};
use crate::config::{Config, Policy};
use crate::event::{LogEvent, LogKind};
use crate::history::{PageId, UsageHistory};
use crate::policy;
use crate::predictor::{self, EvictionPredictor, PredictorError, RemotePredictor};
use crate::stats::CacheStats;

/// Why a particular page ended up being evicted.
///
/// Distinguishing the three resolutions lets tests assert on the cause of
/// an eviction rather than only on the final cache contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VictimSource {
    /// The active policy (local evaluator or remote predictor) chose a
    /// resident page and it was honored.
    Policy,
    /// The remote predictor failed; the local LFU evaluator chose instead.
    LfuFallback,
    /// The chosen page was not resident; slot 0 was evicted as the
    /// deterministic last resort.
    Failsafe,
}

/// Record of one completed eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eviction {
    /// The page that was actually removed from the cache.
    pub victim: PageId,
    /// The slot that was overwritten (position preserved).
    pub slot: usize,
    /// How the victim came to be selected.
    pub source: VictimSource,
}

/// Result of one call to [`CacheController::handle_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A request was already in flight; this one was silently dropped.
    Dropped,
    /// The identifier was empty after normalization; no state changed.
    Rejected,
    /// The page was resident.
    Hit,
    /// The page was admitted into a free slot (no eviction).
    Inserted,
    /// The page was admitted by evicting a resident page.
    Evicted(Eviction),
}

/// The simulation core: cache slots, history, statistics, and the
/// eviction decision chain.
///
/// The clock and predictor are trait objects, so `Debug` is implemented by
/// hand over the observable state.
pub struct CacheController {
    capacity: usize,
    policy: Policy,
    cache: Vec<PageId>,
    history: UsageHistory,
    stats: CacheStats,
    clock: Box<dyn Clock>,
    predictor: Box<dyn EvictionPredictor>,
    events: Vec<LogEvent>,
    processing: bool,
}

impl CacheController {
    /// Creates a controller with the production clock and HTTP predictor.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (a
    /// request-construction failure in the predictor taxonomy).
    pub fn new(config: &Config) -> Result<Self, PredictorError> {
        let predictor = RemotePredictor::new(&config.predictor)?;
        Ok(Self::with_parts(
            config,
            Box::new(SessionClock::new()),
            Box::new(predictor),
        ))
    }

    /// Creates a controller with explicit clock and predictor
    /// implementations. This is the seam tests use to drive time and
    /// script predictor behavior.
    pub fn with_parts(
        config: &Config,
        clock: Box<dyn Clock>,
        predictor: Box<dyn EvictionPredictor>,
    ) -> Self {
        // A zero-slot cache would make every miss an eviction with no
        // possible victim; clamp to one slot.
        let capacity = config.capacity.max(1);
        Self {
            capacity,
            policy: config.policy,
            cache: Vec::with_capacity(capacity),
            history: UsageHistory::new(),
            stats: CacheStats::default(),
            clock,
            predictor,
            events: Vec::new(),
            processing: false,
        }
    }

    /// Handles one page request end to end.
    ///
    /// This is the single admission gate: requests arriving while another
    /// is in flight are dropped (not queued), and empty identifiers are
    /// rejected before any state mutation. Neither case is an error.
    pub fn handle_request(&mut self, raw: &str) -> RequestOutcome {
        if self.processing {
            return RequestOutcome::Dropped;
        }
        let Some(page) = PageId::parse(raw) else {
            return RequestOutcome::Rejected;
        };

        self.processing = true;
        let outcome = self.admit(page);
        self.processing = false;
        outcome
    }

    /// Runs the hit/miss state machine for a normalized page identifier.
    fn admit(&mut self, page: PageId) -> RequestOutcome {
        if self.cache.contains(&page) {
            self.stats.hits += 1;
            self.log(LogKind::Hit, format!("page \"{page}\" found in cache"));
            let now = self.clock.now_ms();
            self.history.record_access(&page, now);
            return RequestOutcome::Hit;
        }

        self.stats.misses += 1;
        self.log(LogKind::Miss, format!("page \"{page}\" not in cache"));

        let outcome = if self.cache.len() < self.capacity {
            self.log(LogKind::Info, format!("adding page \"{page}\" to cache"));
            self.cache.push(page.clone());
            RequestOutcome::Inserted
        } else {
            RequestOutcome::Evicted(self.evict_for(&page))
        };

        let now = self.clock.now_ms();
        self.history.record_access(&page, now);
        outcome
    }

    /// Selects a victim, validates it, and installs `incoming` in its slot.
    ///
    /// Called only with a full cache, so every evaluator sees a non-empty
    /// slice and the slot-0 failsafe always has a page to remove.
    fn evict_for(&mut self, incoming: &PageId) -> Eviction {
        let (choice, source) = self.select_victim();
        self.log(
            LogKind::Evict,
            format!("policy selected page \"{choice}\" for eviction"),
        );

        match self.cache.iter().position(|p| *p == choice) {
            Some(slot) => {
                self.cache[slot] = incoming.clone();
                Eviction {
                    victim: choice,
                    slot,
                    source,
                }
            }
            None => {
                // Policy-contract violation: the chosen page is not
                // resident (stale or foreign id). Evict slot 0 instead.
                let victim = self.cache[0].clone();
                tracing::warn!(
                    chosen = %choice,
                    evicted = %victim,
                    "policy returned non-resident page, applying slot-0 failsafe"
                );
                self.log(
                    LogKind::Warn,
                    format!(
                        "policy returned invalid page \"{choice}\"; evicting \"{victim}\" instead"
                    ),
                );
                self.cache[0] = incoming.clone();
                Eviction {
                    victim,
                    slot: 0,
                    source: VictimSource::Failsafe,
                }
            }
        }
    }

    /// Obtains an eviction candidate from the active policy.
    ///
    /// `ML_SERVER` consults the remote predictor; any failure there is
    /// logged and resolved through the local LFU evaluator, which is
    /// always computable on a non-empty cache. Local policies never fail.
    fn select_victim(&mut self) -> (PageId, VictimSource) {
        match self.policy {
            Policy::MlServer => {
                let now = self.clock.now_ms();
                let request = predictor::build_request(&self.cache, &self.history, now);
                self.log(LogKind::Info, "requesting eviction from predictor");
                match self.predictor.predict(&request) {
                    Ok(choice) => {
                        self.log(LogKind::Info, format!("predictor chose \"{choice}\""));
                        (choice, VictimSource::Policy)
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "predictor call failed, falling back to LFU");
                        self.log(
                            LogKind::Error,
                            format!("predictor call failed ({err}); falling back to LFU"),
                        );
                        let victim = policy::lfu::select(&self.cache, &self.history);
                        (victim, VictimSource::LfuFallback)
                    }
                }
            }
            local => (
                policy::evaluate(local, &self.cache, &self.history),
                VictimSource::Policy,
            ),
        }
    }

    /// Appends an event to the simulation log stream.
    fn log(&mut self, kind: LogKind, message: impl Into<String>) {
        self.events.push(LogEvent::new(kind, message));
    }

    /// Current cache contents in slot order.
    pub fn contents(&self) -> &[PageId] {
        &self.cache
    }

    /// Number of page slots in the cache.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Currently active eviction policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Switches the active eviction policy for subsequent requests.
    pub fn set_policy(&mut self, policy: Policy) {
        self.policy = policy;
        self.log(
            LogKind::Info,
            format!("eviction policy set to {}", policy.selector()),
        );
    }

    /// Snapshot of the session statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Read-only view of the usage-history ledger.
    pub fn history(&self) -> &UsageHistory {
        &self.history
    }

    /// Takes all log events accumulated since the previous drain.
    pub fn drain_events(&mut self) -> Vec<LogEvent> {
        std::mem::take(&mut self.events)
    }

    /// Log events accumulated since the previous drain, without taking them.
    pub fn events(&self) -> &[LogEvent] {
        &self.events
    }
}

impl std::fmt::Debug for CacheController {
    /// Formats the observable controller state (clock and predictor are
    /// opaque trait objects).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheController")
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .field("cache", &self.cache)
            .field("stats", &self.stats)
            .field("processing", &self.processing)
            .finish_non_exhaustive()
    }
}
