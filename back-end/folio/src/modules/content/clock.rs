use chrono::{DateTime, SubsecRound, Utc};

/// Source of creation/update times. Record ids are derived from it.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock, truncated to the millisecond precision that is persisted.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

/// Deterministic clock: starts at `start` and moves forward `step_ms` on
/// every read, so consecutive creates get distinct ids.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug)]
pub struct TickingClock {
    next: std::cell::Cell<DateTime<Utc>>,
    step: chrono::Duration,
}

#[cfg(any(test, feature = "testing"))]
impl TickingClock {
    pub fn new(start: DateTime<Utc>, step_ms: i64) -> Self {
        Self {
            next: std::cell::Cell::new(start.trunc_subsecs(3)),
            step: chrono::Duration::milliseconds(step_ms),
        }
    }

    pub fn from_millis(start_ms: i64) -> Self {
        let start = DateTime::from_timestamp_millis(start_ms).unwrap_or_default();
        Self::new(start, 1)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.next.get();
        self.next.set(now + self.step);
        now
    }
}
