//! Reservation domain models and operation parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

pub use crate::model::reservation::{ReservationSortBy, SortOrder, TechnicalLevel};
use crate::{
    model::reservation::{
        BrowseReservationDto, CreateReservationDto, EditReservationDto, PaginatedReservationsDto,
        ReservationDetailDto, ReservationDto,
    },
    server::model::{member::ReservationMemberWithName, time_range::DateTimeRange},
};

/// Vacancy value marking a private, invite-only reservation.
pub const PRIVATE_VACANCY: i32 = -1;

impl TechnicalLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "ENTRY",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
            Self::Professional => "PROFESSIONAL",
        }
    }

    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "ENTRY" => Ok(Self::Entry),
            "INTERMEDIATE" => Ok(Self::Intermediate),
            "ADVANCED" => Ok(Self::Advanced),
            "PROFESSIONAL" => Ok(Self::Professional),
            other => Err(DbErr::Type(format!("Unknown technical level '{}'", other))),
        }
    }
}

/// Encodes a level set as the comma separated column value, dropping duplicates.
pub fn encode_technical_levels(levels: &[TechnicalLevel]) -> String {
    let mut codes: Vec<&str> = Vec::with_capacity(levels.len());
    for level in levels {
        if !codes.contains(&level.as_str()) {
            codes.push(level.as_str());
        }
    }
    codes.join(",")
}

pub fn decode_technical_levels(value: &str) -> Result<Vec<TechnicalLevel>, DbErr> {
    value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(TechnicalLevel::from_db)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub court_id: i32,
    pub venue_id: i32,
    pub stadium_id: i32,
    pub range: DateTimeRange,
    pub technical_levels: Vec<TechnicalLevel>,
    pub invitation_code: String,
    pub remark: Option<String>,
    pub member_count: i32,
    /// Open slots, or `PRIVATE_VACANCY` for invite-only reservations.
    pub vacancy: i32,
    pub is_cancelled: bool,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            court_id: entity.court_id,
            venue_id: entity.venue_id,
            stadium_id: entity.stadium_id,
            range: DateTimeRange::new(entity.start_time, entity.end_time),
            technical_levels: decode_technical_levels(&entity.technical_levels)?,
            invitation_code: entity.invitation_code,
            remark: entity.remark,
            member_count: entity.member_count,
            vacancy: entity.vacancy,
            is_cancelled: entity.is_cancelled,
            created_at: entity.created_at,
        })
    }

    pub fn is_private(&self) -> bool {
        self.vacancy == PRIVATE_VACANCY
    }

    /// A live reservation with no vacancy left takes the whole court.
    pub fn is_fully_booked(&self) -> bool {
        !self.is_cancelled && self.vacancy == 0
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            court_id: self.court_id,
            venue_id: self.venue_id,
            stadium_id: self.stadium_id,
            start_time: self.range.start_time,
            end_time: self.range.end_time,
            technical_levels: self.technical_levels,
            invitation_code: self.invitation_code,
            remark: self.remark,
            member_count: self.member_count,
            vacancy: self.vacancy,
            is_cancelled: self.is_cancelled,
            created_at: self.created_at,
        }
    }
}

/// A reservation together with its members and their nicknames.
#[derive(Debug, Clone)]
pub struct ReservationWithMembers {
    pub reservation: Reservation,
    pub members: Vec<ReservationMemberWithName>,
}

impl ReservationWithMembers {
    pub fn into_dto(self) -> ReservationDetailDto {
        ReservationDetailDto {
            reservation: self.reservation.into_dto(),
            members: self
                .members
                .into_iter()
                .map(ReservationMemberWithName::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedReservations {
    pub reservations: Vec<Reservation>,
    /// Size of the whole filtered set, independent of limit and offset.
    pub total_count: u64,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl PaginatedReservations {
    pub fn into_dto(self) -> PaginatedReservationsDto {
        PaginatedReservationsDto {
            data: self
                .reservations
                .into_iter()
                .map(Reservation::into_dto)
                .collect(),
            total_count: self.total_count,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// Input of a reservation booking.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub court_id: i32,
    pub range: DateTimeRange,
    pub technical_levels: Vec<TechnicalLevel>,
    pub remark: Option<String>,
    pub member_count: i32,
    pub vacancy: i32,
    /// Accounts taking part, the caller included.
    pub member_ids: Vec<i32>,
}

impl CreateReservationParams {
    pub fn from_dto(court_id: i32, dto: CreateReservationDto) -> Self {
        Self {
            court_id,
            range: DateTimeRange::new(dto.start_time, dto.end_time),
            technical_levels: dto.technical_levels,
            remark: dto.remark,
            member_count: dto.member_count,
            vacancy: dto.vacancy,
            member_ids: dto.member_ids,
        }
    }
}

/// Fully resolved row handed to the repository on insert.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub court_id: i32,
    pub venue_id: i32,
    pub stadium_id: i32,
    pub range: DateTimeRange,
    pub technical_levels: Vec<TechnicalLevel>,
    pub invitation_code: String,
    pub remark: Option<String>,
    pub member_count: i32,
    pub vacancy: i32,
}

/// Partial update of a reservation; `None` leaves the stored value.
///
/// `remark` is doubly optional: `Some(None)` clears it, `None` keeps it.
#[derive(Debug, Clone, Default)]
pub struct EditReservationParams {
    pub court_id: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub vacancy: Option<i32>,
    pub technical_levels: Option<Vec<TechnicalLevel>>,
    pub remark: Option<Option<String>>,
}

impl EditReservationParams {
    pub fn from_dto(dto: EditReservationDto) -> Self {
        Self {
            court_id: dto.court_id,
            start_time: dto.start_time,
            end_time: dto.end_time,
            vacancy: dto.vacancy,
            technical_levels: dto.technical_levels,
            remark: dto.remark,
        }
    }

    /// Court and time range after applying this edit to `current`.
    pub fn effective_slot(&self, current: &Reservation) -> (i32, DateTimeRange) {
        (
            self.court_id.unwrap_or(current.court_id),
            DateTimeRange::new(
                self.start_time.unwrap_or(current.range.start_time),
                self.end_time.unwrap_or(current.range.end_time),
            ),
        )
    }
}

/// Repository level update with the court location already resolved.
#[derive(Debug, Clone)]
pub struct UpdateReservationParams {
    pub id: i32,
    pub court_id: i32,
    pub venue_id: i32,
    pub stadium_id: i32,
    pub range: DateTimeRange,
    pub vacancy: Option<i32>,
    pub technical_levels: Option<Vec<TechnicalLevel>>,
    pub remark: Option<Option<String>>,
}

/// Filters, paging and ordering of a reservation search. Unset filters match
/// everything.
#[derive(Debug, Clone, Default)]
pub struct BrowseReservationParams {
    pub city_id: Option<i32>,
    pub district_id: Option<i32>,
    pub sport_id: Option<i32>,
    pub stadium_id: Option<i32>,
    pub court_id: Option<i32>,
    /// A reservation matches when it overlaps any of these.
    pub time_ranges: Vec<DateTimeRange>,
    pub technical_level: Option<TechnicalLevel>,
    /// `Some(true)` keeps reservations with open slots, `Some(false)` keeps full
    /// and private ones.
    pub has_vacancy: Option<bool>,
    pub is_cancelled: Option<bool>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub sort_by: ReservationSortBy,
    pub order: SortOrder,
}

impl BrowseReservationParams {
    pub fn from_dto(dto: BrowseReservationDto) -> Self {
        Self {
            city_id: dto.city_id,
            district_id: dto.district_id,
            sport_id: dto.sport_id,
            stadium_id: dto.stadium_id,
            court_id: dto.court_id,
            time_ranges: dto
                .time_ranges
                .unwrap_or_default()
                .into_iter()
                .map(DateTimeRange::from_dto)
                .collect(),
            technical_level: dto.technical_level,
            has_vacancy: dto.has_vacancy,
            is_cancelled: dto.is_cancelled,
            limit: dto.limit,
            offset: dto.offset,
            sort_by: dto.sort_by,
            order: dto.order,
        }
    }
}
