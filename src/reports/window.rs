use chrono::{Duration, NaiveDate};

use crate::error::ApiError;

/// Days covered by the weekly report, today included
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Inclusive range of sale dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting one that ends before it starts
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ApiError> {
        if start > end {
            return Err(ApiError::BadRequest(format!(
                "start_date {} is after end_date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// The last seven days ending on `today`
    pub fn weekly_window(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(WEEKLY_WINDOW_DAYS - 1),
            end: today,
        }
    }
}

#[cfg(test)]
impl DateRange {
    fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}
