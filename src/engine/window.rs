use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// A half-open `[start, end)` range aligned on day boundaries.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DayWindow {
    first_day: NaiveDate,
    start: NaiveDateTime,
    end: NaiveDateTime
}

impl DayWindow {
    /// The `days` calendar days ending with (and including) `last_day`.
    pub fn ending_on(last_day: NaiveDate, days: u32) -> Self {
        let first_day = last_day
            .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
            .unwrap_or(NaiveDate::MIN);
        let end = last_day.succ_opt()
            .map(start_of)
            .unwrap_or(NaiveDateTime::MAX);

        Self { first_day, start: start_of(first_day), end }
    }

    pub fn today(reference: NaiveDate) -> Self {
        Self::ending_on(reference, 1)
    }

    pub fn yesterday(reference: NaiveDate) -> Self {
        Self::ending_on(reference.pred_opt().unwrap_or(NaiveDate::MIN), 1)
    }

    pub fn trailing_days(reference: NaiveDate, days: u32) -> Self {
        Self::ending_on(reference, days)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}

fn start_of(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}
