//! Simulation log events.
//!
//! The controller emits one event per decision point (add, hit, miss,
//! evict, fallback, failsafe, predictor error). Front ends drain and render
//! these however they like; the engine never writes to the terminal itself.

use std::fmt;

/// Category of a simulation log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// Neutral progress information (page added, predictor consulted).
    Info,
    /// Requested page was resident.
    Hit,
    /// Requested page was not resident.
    Miss,
    /// A resident page was selected and evicted.
    Evict,
    /// Recoverable contract violation (failsafe eviction applied).
    Warn,
    /// Predictor failure resolved through the local fallback.
    Error,
}

impl fmt::Display for LogKind {
    /// Formats the kind as an uppercase tag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            LogKind::Info => "INFO",
            LogKind::Hit => "HIT",
            LogKind::Miss => "MISS",
            LogKind::Evict => "EVICT",
            LogKind::Warn => "WARN",
            LogKind::Error => "ERROR",
        };
        f.write_str(tag)
    }
}

/// One entry in the simulation log stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    /// Event category.
    pub kind: LogKind,
    /// Human-readable description of the decision.
    pub message: String,
}

impl LogEvent {
    /// Creates a log event.
    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for LogEvent {
    /// Formats the event as `KIND: message`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
