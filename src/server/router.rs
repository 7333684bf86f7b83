use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        court::{self, COURT_TAG},
        health::{self, HEALTH_TAG},
        member::{self, MEMBER_TAG},
        reservation::{self, RESERVATION_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Courtside API", description = "Court reservation backend"),
    tags(
        (name = HEALTH_TAG, description = "Liveness"),
        (name = AUTH_TAG, description = "Current account and logout"),
        (name = COURT_TAG, description = "Courts and their schedules"),
        (name = RESERVATION_TAG, description = "Reservation lifecycle"),
        (name = MEMBER_TAG, description = "Reservation membership"),
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI documentation served at `/api/docs`.
///
/// Handlers sharing a path are registered in one `routes!` call.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::get_account))
        .routes(routes!(auth::logout))
        .routes(routes!(court::get_court))
        .routes(routes!(court::get_venue_courts))
        .routes(routes!(court::browse_court_reservations))
        .routes(routes!(reservation::create_reservation))
        .routes(routes!(reservation::browse_reservations))
        .routes(routes!(
            reservation::get_reservation,
            reservation::edit_reservation,
            reservation::delete_reservation
        ))
        .routes(routes!(reservation::cancel_reservation))
        .routes(routes!(
            reservation::get_reservation_by_code,
            member::join_reservation
        ))
        .routes(routes!(member::leave_reservation))
        .routes(routes!(member::reject_invitation))
        .routes(routes!(member::get_reservation_members))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
