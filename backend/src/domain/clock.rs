//! Time source for the domain.
//!
//! Every "what day is it" question in the core goes through a [`Clock`] so
//! calendar and validation logic stay deterministic under test.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Source of the current instant and the user's current calendar day
pub trait Clock: Send + Sync {
    /// Current instant, used for timestamps and ids
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day in the user's local time zone
    fn today(&self) -> NaiveDate;

    /// Current instant as epoch milliseconds
    fn now_millis(&self) -> u64 {
        self.now().timestamp_millis().max(0) as u64
    }
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>, today: NaiveDate) -> Self {
        Self { now, today }
    }

    /// Frozen at noon UTC on `today`
    pub fn on(today: NaiveDate) -> Self {
        let noon = today.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));
        Self {
            now: Utc.from_utc_datetime(&noon),
            today,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
