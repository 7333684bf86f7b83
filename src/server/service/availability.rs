//! Court availability checks.
//!
//! A court is double booked when two live reservations overlap. Search by date is
//! looser: a candidate range only counts as taken when a full, live reservation
//! covers it completely, since anything with vacancy left can still be joined.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::{reservation::Reservation, time_range::DateTimeRange},
};

pub struct AvailabilityService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Live reservations on the court overlapping `range`, except `exclude`.
    pub async fn find_conflicts(
        &self,
        court_id: i32,
        range: &DateTimeRange,
        exclude: Option<i32>,
    ) -> Result<Vec<Reservation>, AppError> {
        let conflicts = ReservationRepository::new(self.db)
            .find_conflicts(court_id, range, exclude)
            .await?;

        Ok(conflicts)
    }

    /// Date of the first range, in input order, that no full reservation covers.
    ///
    /// Each range is checked against the court's reservations on its start date.
    pub async fn find_first_available(
        &self,
        court_id: i32,
        ranges: &[DateTimeRange],
    ) -> Result<Option<NaiveDate>, AppError> {
        let repo = ReservationRepository::new(self.db);
        let mut by_date: HashMap<NaiveDate, Vec<Reservation>> = HashMap::new();

        for range in ranges {
            let date = range.start_date();
            if !by_date.contains_key(&date) {
                let reservations = repo
                    .browse_by_court_between(court_id, &DateTimeRange::day(date))
                    .await?;
                by_date.insert(date, reservations);
            }

            let reservations = by_date.get(&date).map(Vec::as_slice).unwrap_or_default();
            if is_range_open(reservations, range) {
                return Ok(Some(date));
            }
        }

        Ok(None)
    }
}

fn is_range_open(reservations: &[Reservation], range: &DateTimeRange) -> bool {
    !reservations
        .iter()
        .any(|r| r.is_fully_booked() && r.range.contains(range))
}
