use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, member::ReservationMemberDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::membership::MembershipService,
        state::AppState,
    },
};

/// Tag for grouping membership endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Join a reservation with its invitation code.
///
/// Joining again is a no-op. A pending invitation is accepted.
///
/// # Returns
/// - `204 No Content` - Caller is a joined member
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller rejected the invitation earlier
/// - `404 Not Found` - Unknown invitation code
/// - `409 Conflict` - No vacancy left
#[utoipa::path(
    post,
    path = "/api/reservation/code/{code}",
    tag = MEMBER_TAG,
    params(
        ("code" = String, Path, description = "Invitation code")
    ),
    responses(
        (status = 204, description = "Joined the reservation"),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 403, description = "Invitation already rejected", body = ErrorDto),
        (status = 404, description = "Unknown invitation code", body = ErrorDto),
        (status = 409, description = "Reservation is full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;

    MembershipService::new(&state.db, &state.calendar)
        .join(caller.id, &code)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Leave a reservation. The last member leaving deletes it.
#[utoipa::path(
    delete,
    path = "/api/reservation/{reservation_id}/leave",
    tag = MEMBER_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Left the reservation"),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 404, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;

    MembershipService::new(&state.db, &state.calendar)
        .leave(caller.id, reservation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Decline a pending invitation.
#[utoipa::path(
    post,
    path = "/api/reservation/{reservation_id}/reject-invitation",
    tag = MEMBER_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Invitation rejected"),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 403, description = "No pending invitation to reject", body = ErrorDto),
        (status = 404, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;

    MembershipService::new(&state.db, &state.calendar)
        .reject(caller.id, reservation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the members of a reservation, manager first.
///
/// Members of a private reservation are only visible to its members.
#[utoipa::path(
    get,
    path = "/api/reservation/{reservation_id}/members",
    tag = MEMBER_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Members of the reservation", body = Vec<ReservationMemberDto>),
        (status = 401, description = "Login required", body = ErrorDto),
        (status = 403, description = "Private reservation", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_members(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require().await?;

    let members = MembershipService::new(&state.db, &state.calendar)
        .browse_members(caller.id, reservation_id)
        .await?
        .into_iter()
        .map(|member| member.into_dto())
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(members)))
}
