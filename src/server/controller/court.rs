use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        court::{BrowseCourtReservationDto, CourtDto, CourtReservationsDto},
    },
    server::{
        error::AppError,
        model::time_range::DateTimeRange,
        service::court::CourtService,
        state::AppState,
    },
};

/// Tag for grouping court endpoints in OpenAPI documentation
pub static COURT_TAG: &str = "court";

/// Get a published court.
///
/// # Returns
/// - `200 OK` - Court details
/// - `404 Not Found` - Court missing or unpublished
#[utoipa::path(
    get,
    path = "/api/court/{court_id}",
    tag = COURT_TAG,
    params(
        ("court_id" = i32, Path, description = "Court ID")
    ),
    responses(
        (status = 200, description = "Court details", body = CourtDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_court(
    State(state): State<AppState>,
    Path(court_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let court = CourtService::new(&state.db).read(court_id).await?;

    Ok((StatusCode::OK, Json(court.into_dto())))
}

/// List the published courts of a venue, ordered by number.
#[utoipa::path(
    get,
    path = "/api/venue/{venue_id}/courts",
    tag = COURT_TAG,
    params(
        ("venue_id" = i32, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Courts of the venue", body = Vec<CourtDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venue_courts(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let courts = CourtService::new(&state.db)
        .browse_by_venue(venue_id)
        .await?
        .into_iter()
        .map(|court| court.into_dto())
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(courts)))
}

/// Browse a week of a court's reservations.
///
/// With `start_date`, or with an empty body, the week starts at that date or
/// today. With only `time_ranges`, the week starts at the first date on which
/// one of the ranges is still bookable.
///
/// # Returns
/// - `200 OK` - Start date of the week and its reservations, cancelled included
/// - `404 Not Found` - Court missing, or no requested range is available
#[utoipa::path(
    post,
    path = "/api/court/{court_id}/reservation/browse",
    tag = COURT_TAG,
    params(
        ("court_id" = i32, Path, description = "Court ID")
    ),
    request_body = BrowseCourtReservationDto,
    responses(
        (status = 200, description = "Reservations of the week", body = CourtReservationsDto),
        (status = 404, description = "Court not found or no available date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn browse_court_reservations(
    State(state): State<AppState>,
    Path(court_id): Path<i32>,
    Json(payload): Json<BrowseCourtReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let time_ranges = payload
        .time_ranges
        .unwrap_or_default()
        .into_iter()
        .map(DateTimeRange::from_dto)
        .collect();

    let (start_date, reservations) = CourtService::new(&state.db)
        .browse_schedule(
            court_id,
            payload.start_date,
            time_ranges,
            Utc::now().date_naive(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(CourtReservationsDto {
            start_date,
            reservations: reservations.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}
