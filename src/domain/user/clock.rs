//! Time source used for stamping and past-date checks

use chrono::{Local, NaiveDate, NaiveTime};

#[cfg(test)]
use mockall::automock;

/// Source of the current local date and time
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Current calendar date
    fn today(&self) -> NaiveDate;

    /// Current time of day
    fn now(&self) -> NaiveTime;
}

/// Clock backed by the system's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock pinned to a fixed instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
    time: NaiveTime,
}

impl FixedClock {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn now(&self) -> NaiveTime {
        self.time
    }
}
