use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{court::CourtRepository, reservation::ReservationRepository},
    error::{reservation::ReservationError, AppError},
    model::{court::Court, reservation::Reservation, time_range::DateTimeRange},
    service::availability::AvailabilityService,
};

/// Length of the court schedule window in days.
pub const SCHEDULE_DAYS: u64 = 7;

pub struct CourtService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourtService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn read(&self, court_id: i32) -> Result<Court, AppError> {
        let court = CourtRepository::new(self.db)
            .read(court_id, false)
            .await?
            .ok_or_else(|| ReservationError::NotFound(format!("Court {} not found", court_id)))?;

        Ok(court)
    }

    pub async fn browse_by_venue(&self, venue_id: i32) -> Result<Vec<Court>, AppError> {
        let courts = CourtRepository::new(self.db)
            .browse_by_venue(venue_id, false)
            .await?;

        Ok(courts)
    }

    /// Gets a week of the court's schedule.
    ///
    /// The week starts at `start_date` when given. Without it, non-empty
    /// `time_ranges` select the first date on which one of them is still
    /// bookable; otherwise the week starts `today`.
    ///
    /// Venue business hours are not stored, so no opening-hours check is made.
    ///
    /// # Returns
    /// - `Ok((start_date, reservations))` - First day of the window and its reservations
    /// - `Err(NotFound)` - Court is missing, or none of the ranges is available
    pub async fn browse_schedule(
        &self,
        court_id: i32,
        start_date: Option<NaiveDate>,
        time_ranges: Vec<DateTimeRange>,
        today: NaiveDate,
    ) -> Result<(NaiveDate, Vec<Reservation>), AppError> {
        let court = self.read(court_id).await?;

        let start_date = match start_date {
            Some(date) => date,
            None if time_ranges.is_empty() => today,
            None => AvailabilityService::new(self.db)
                .find_first_available(court.id, &time_ranges)
                .await?
                .ok_or_else(|| {
                    ReservationError::NotFound("No available date for the requested times".to_string())
                })?,
        };

        let reservations = ReservationRepository::new(self.db)
            .browse_by_court_between(court.id, &DateTimeRange::days_from(start_date, SCHEDULE_DAYS))
            .await?;

        Ok((start_date, reservations))
    }
}
