use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{
            BrowseReservationDto, CreateReservationDto, CreatedReservationDto,
            EditReservationDto, PaginatedReservationsDto, ReservationDetailDto, ReservationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::reservation::{
            BrowseReservationParams, CreateReservationParams, EditReservationParams,
        },
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Book a court.
///
/// The caller becomes the manager and must be listed in `member_ids`; the
/// other listed accounts are invited.
///
/// # Returns
/// - `201 Created` - Id of the new reservation
/// - `400 Bad Request` - Start in the past, start not before end, or invalid vacancy
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller missing from `member_ids`
/// - `404 Not Found` - Court missing or unpublished
/// - `409 Conflict` - Court already reserved for an overlapping time
#[utoipa::path(
    post,
    path = "/api/court/{court_id}/reservation",
    tag = RESERVATION_TAG,
    params(
        ("court_id" = i32, Path, description = "Court ID")
    ),
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = CreatedReservationDto),
        (status = 400, description = "Invalid reservation time or vacancy", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 409, description = "Court already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(court_id): Path<i32>,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;

    let params = CreateReservationParams::from_dto(court_id, payload);

    let id = ReservationService::new(&state.db, &state.calendar)
        .create(caller.id, Utc::now(), params)
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedReservationDto { id })))
}

/// Search reservations.
///
/// Filters combine with AND; a reservation matches `time_ranges` when it
/// overlaps any of them. Defaults to the latest start time first.
#[utoipa::path(
    post,
    path = "/api/view/reservation",
    tag = RESERVATION_TAG,
    request_body = BrowseReservationDto,
    responses(
        (status = 200, description = "Page of matching reservations", body = PaginatedReservationsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn browse_reservations(
    State(state): State<AppState>,
    Json(payload): Json<BrowseReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let page = ReservationService::new(&state.db, &state.calendar)
        .browse(BrowseReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a reservation with its members.
#[utoipa::path(
    get,
    path = "/api/reservation/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation with members", body = ReservationDetailDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db, &state.calendar)
        .read(reservation_id)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Edit a reservation. Manager only.
///
/// Absent fields keep their value; `"remark": null` clears the remark. The
/// resulting court and time are checked like a new booking.
///
/// # Returns
/// - `200 OK` - Updated reservation
/// - `400 Bad Request` - Start in the past, start not before end, or invalid vacancy
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not the manager
/// - `404 Not Found` - Reservation or target court missing
/// - `409 Conflict` - Another reservation overlaps the new time
#[utoipa::path(
    patch,
    path = "/api/reservation/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    request_body = EditReservationDto,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDto),
        (status = 400, description = "Invalid reservation time or vacancy", body = ErrorDto),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 403, description = "Caller is not the manager", body = ErrorDto),
        (status = 404, description = "Reservation or court not found", body = ErrorDto),
        (status = 409, description = "Court already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
    Json(payload): Json<EditReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;

    let reservation = ReservationService::new(&state.db, &state.calendar)
        .edit(
            caller.id,
            Utc::now(),
            reservation_id,
            EditReservationParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Delete a reservation and its memberships. Manager only.
#[utoipa::path(
    delete,
    path = "/api/reservation/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 403, description = "Caller is not the manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;

    ReservationService::new(&state.db, &state.calendar)
        .delete(caller.id, reservation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Cancel a reservation. Manager only; the reservation stays visible.
#[utoipa::path(
    delete,
    path = "/api/reservation/{reservation_id}/cancel",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation cancelled"),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 403, description = "Caller is not the manager", body = ErrorDto),
        (status = 404, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;

    ReservationService::new(&state.db, &state.calendar)
        .cancel(caller.id, reservation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Look up a reservation by its invitation code.
#[utoipa::path(
    get,
    path = "/api/reservation/code/{code}",
    tag = RESERVATION_TAG,
    params(
        ("code" = String, Path, description = "Invitation code")
    ),
    responses(
        (status = 200, description = "Reservation holding the code", body = ReservationDto),
        (status = 404, description = "Unknown invitation code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db, &state.calendar)
        .read_by_code(&code)
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}
