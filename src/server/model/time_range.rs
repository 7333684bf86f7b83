//! Half-open time intervals and their overlap rules.

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::model::reservation::TimeRangeDto;

/// A half-open interval `[start_time, end_time)`.
///
/// Two ranges that only touch at an endpoint do not overlap, so back-to-back
/// bookings on the same court are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeRange {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl DateTimeRange {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// The whole UTC day of `date`.
    pub fn day(date: NaiveDate) -> Self {
        let start_time = date.and_time(chrono::NaiveTime::MIN).and_utc();
        Self::new(start_time, start_time + chrono::Duration::days(1))
    }

    /// `days` whole UTC days starting at `date`.
    pub fn days_from(date: NaiveDate, days: u64) -> Self {
        let start = Self::day(date).start_time;
        let end = date
            .checked_add_days(Days::new(days))
            .map(|end| Self::day(end).start_time)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self::new(start, end)
    }

    /// Whether `self` and `other` share at least one instant.
    pub fn overlaps(&self, other: &DateTimeRange) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn contains(&self, other: &DateTimeRange) -> bool {
        self.start_time <= other.start_time && other.end_time <= self.end_time
    }

    /// A range whose start is not before its end holds no instant.
    pub fn is_empty(&self) -> bool {
        self.start_time >= self.end_time
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }

    pub fn from_dto(dto: TimeRangeDto) -> Self {
        Self::new(dto.start_time, dto.end_time)
    }
}
