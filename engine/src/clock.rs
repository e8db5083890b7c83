//! Wall-clock collaborator.
//!
//! The store never reads the system time directly; it asks an injected
//! [`Clock`] so tests can pin both the calendar date and the instant.

use crate::{LogDate, Timestamp};
use chrono::{Local, NaiveDate, Utc};
use std::sync::Mutex;

/// Source of "today" and "now".
pub trait Clock: Send + Sync {
    /// The current calendar date, used as the key of today's log.
    fn today(&self) -> LogDate;

    /// The current instant in milliseconds since the Unix epoch.
    fn now_millis(&self) -> Timestamp;
}

/// The real clock. `today` is the local calendar date of the device.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> LogDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> Timestamp {
        Utc::now().timestamp_millis().max(0) as Timestamp
    }
}

/// A settable clock for tests and replays.
#[derive(Debug)]
pub struct FixedClock {
    state: Mutex<(LogDate, Timestamp)>,
}

impl FixedClock {
    pub fn new(today: LogDate, now_millis: Timestamp) -> Self {
        Self {
            state: Mutex::new((today, now_millis)),
        }
    }

    /// Clock pinned to `YYYY-MM-DD`. Panics on an invalid date; meant for
    /// test setup.
    pub fn at(date: &str, now_millis: Timestamp) -> Self {
        let today = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap_or_else(|e| panic!("invalid date '{}': {}", date, e));
        Self::new(today, now_millis)
    }

    pub fn set_today(&self, today: LogDate) {
        self.lock().0 = today;
    }

    pub fn set_now(&self, now_millis: Timestamp) {
        self.lock().1 = now_millis;
    }

    /// Move the instant forward by `millis`.
    pub fn advance(&self, millis: Timestamp) {
        self.lock().1 += millis;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, (LogDate, Timestamp)> {
        // The guarded data is plain values; a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> LogDate {
        self.lock().0
    }

    fn now_millis(&self) -> Timestamp {
        self.lock().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_pinned_values() {
        let clock = FixedClock::at("2024-03-05", 1_709_600_000_000);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(clock.now_millis(), 1_709_600_000_000);
    }

    #[test]
    fn fixed_clock_can_move() {
        let clock = FixedClock::at("2024-03-05", 1000);
        clock.advance(500);
        assert_eq!(clock.now_millis(), 1500);

        let tomorrow = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        clock.set_today(tomorrow);
        assert_eq!(clock.today(), tomorrow);

        clock.set_now(7);
        assert_eq!(clock.now_millis(), 7);
    }

    #[test]
    fn system_clock_is_after_2020() {
        let clock = SystemClock;
        assert!(clock.now_millis() > 1_577_836_800_000);
        assert!(clock.today() > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
