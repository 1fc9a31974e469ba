use chrono::{DateTime, Utc};

/// Wall-clock abstraction used to derive "today" for the dosage cycle.
///
/// - now(): returns the current instant in UTC
/// - Callers convert to a calendar date in their configured timezone.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Default clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant. Used by tests and by date overrides.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
