//! Reservation factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Timelike, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for reservations on a given court.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(db, &venue, &court)
///     .time(start, start + Duration::hours(2))
///     .vacancy(0)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    court_id: i32,
    venue_id: i32,
    stadium_id: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    technical_levels: String,
    invitation_code: String,
    remark: Option<String>,
    member_count: i32,
    vacancy: i32,
    is_cancelled: bool,
}

impl<'a> ReservationFactory<'a> {
    /// Defaults: tomorrow on the hour for two hours, 4 players, 2 open slots,
    /// `ENTRY` level, a unique invitation code.
    pub fn new(
        db: &'a DatabaseConnection,
        venue: &entity::venue::Model,
        court: &entity::court::Model,
    ) -> Self {
        let start_time = tomorrow_on_the_hour();
        Self {
            db,
            court_id: court.id,
            venue_id: venue.id,
            stadium_id: venue.stadium_id,
            start_time,
            end_time: start_time + Duration::hours(2),
            technical_levels: "ENTRY".to_string(),
            invitation_code: format!("CODE{:06}", next_id()),
            remark: None,
            member_count: 4,
            vacancy: 2,
            is_cancelled: false,
        }
    }

    pub fn time(mut self, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    /// Comma separated level codes as stored in the column.
    pub fn technical_levels(mut self, technical_levels: impl Into<String>) -> Self {
        self.technical_levels = technical_levels.into();
        self
    }

    pub fn invitation_code(mut self, invitation_code: impl Into<String>) -> Self {
        self.invitation_code = invitation_code.into();
        self
    }

    pub fn remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }

    pub fn member_count(mut self, member_count: i32) -> Self {
        self.member_count = member_count;
        self
    }

    /// Open slots; `-1` makes the reservation private.
    pub fn vacancy(mut self, vacancy: i32) -> Self {
        self.vacancy = vacancy;
        self
    }

    pub fn cancelled(mut self, is_cancelled: bool) -> Self {
        self.is_cancelled = is_cancelled;
        self
    }

    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            court_id: ActiveValue::Set(self.court_id),
            venue_id: ActiveValue::Set(self.venue_id),
            stadium_id: ActiveValue::Set(self.stadium_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            technical_levels: ActiveValue::Set(self.technical_levels),
            invitation_code: ActiveValue::Set(self.invitation_code),
            remark: ActiveValue::Set(self.remark),
            member_count: ActiveValue::Set(self.member_count),
            vacancy: ActiveValue::Set(self.vacancy),
            is_cancelled: ActiveValue::Set(self.is_cancelled),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Start of the next full hour one day from now.
pub fn tomorrow_on_the_hour() -> DateTime<Utc> {
    let tomorrow = Utc::now() + Duration::days(1);
    tomorrow
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(tomorrow)
}

/// Creates a reservation with default values.
pub async fn create_reservation(
    db: &DatabaseConnection,
    venue: &entity::venue::Model,
    court: &entity::court::Model,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, venue, court).build().await
}
