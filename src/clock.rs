//! Wall-clock source for response timestamps.

use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current instant.
pub trait Clock: Debug + Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current instant as an ISO-8601 / RFC 3339 string.
    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

/// Format an instant as RFC 3339 with microsecond precision and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// System clock that never hands out an instant earlier than one it already returned.
#[derive(Debug, Default)]
pub struct SystemClock {
    last_micros: AtomicI64,
}

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now().timestamp_micros();
        let prev = self.last_micros.fetch_max(now, Ordering::AcqRel);
        let micros = prev.max(now);
        DateTime::from_timestamp_micros(micros).unwrap_or_else(Utc::now)
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
