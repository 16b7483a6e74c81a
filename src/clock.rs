//! Wall-clock capability.
//!
//! The phase calculations are pure; anything that depends on "now" goes
//! through [`Clock`] so callers and tests can pin the date.

use chrono::{NaiveDate, Utc};

/// Source of the current civil date.
pub trait Clock {
    /// Current civil date in UTC.
    fn today_utc(&self) -> NaiveDate;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today_utc(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today_utc(&self) -> NaiveDate {
        self.0
    }
}
