use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::model::member::ReservationMemberDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TechnicalLevel {
    Entry,
    Intermediate,
    Advanced,
    Professional,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReservationSortBy {
    #[default]
    Time,
    Vacancy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeRangeDto {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub court_id: i32,
    pub venue_id: i32,
    pub stadium_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub technical_levels: Vec<TechnicalLevel>,
    pub invitation_code: String,
    pub remark: Option<String>,
    pub member_count: i32,
    pub vacancy: i32,
    pub is_cancelled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservationDetailDto {
    #[serde(flatten)]
    pub reservation: ReservationDto,
    pub members: Vec<ReservationMemberDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReservationDto {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub technical_levels: Vec<TechnicalLevel>,
    #[serde(default)]
    pub remark: Option<String>,
    pub member_count: i32,
    /// Open slots left for other players, `-1` keeps the reservation invite-only.
    pub vacancy: i32,
    /// Accounts taking part. Must include the caller.
    pub member_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedReservationDto {
    pub id: i32,
}

/// Partial update of a reservation. Absent fields are left untouched, and an
/// explicit `"remark": null` clears the remark.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EditReservationDto {
    #[serde(default)]
    pub court_id: Option<i32>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub vacancy: Option<i32>,
    #[serde(default)]
    pub technical_levels: Option<Vec<TechnicalLevel>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub remark: Option<Option<String>>,
}

/// Wraps whatever is present (including `null`) in `Some`, so that a missing
/// field and an explicit `null` stay distinguishable.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BrowseReservationDto {
    #[serde(default)]
    pub city_id: Option<i32>,
    #[serde(default)]
    pub district_id: Option<i32>,
    #[serde(default)]
    pub sport_id: Option<i32>,
    #[serde(default)]
    pub stadium_id: Option<i32>,
    #[serde(default)]
    pub court_id: Option<i32>,
    #[serde(default)]
    pub time_ranges: Option<Vec<TimeRangeDto>>,
    #[serde(default)]
    pub technical_level: Option<TechnicalLevel>,
    #[serde(default)]
    pub has_vacancy: Option<bool>,
    #[serde(default)]
    pub is_cancelled: Option<bool>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub sort_by: ReservationSortBy,
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedReservationsDto {
    pub data: Vec<ReservationDto>,
    pub total_count: u64,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}
