//! Clock implementations

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::ports::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same day; the time of day still advances so ids stay
/// unique.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let time = Utc::now().time();
        self.today.and_time(time).and_utc()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
