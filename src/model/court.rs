use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::reservation::{ReservationDto, TimeRangeDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourtDto {
    pub id: i32,
    pub venue_id: i32,
    pub number: i32,
    pub is_published: bool,
}

/// Body of the court reservation browse endpoint.
///
/// With a `start_date` (or with nothing at all) the week starting at that date is
/// returned. With only `time_ranges` the first date on which one of the ranges is
/// still bookable is searched for and its week is returned instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BrowseCourtReservationDto {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub time_ranges: Option<Vec<TimeRangeDto>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourtReservationsDto {
    pub start_date: NaiveDate,
    pub reservations: Vec<ReservationDto>,
}
