use axum::{http::StatusCode, response::IntoResponse};

pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running")
    ),
)]
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}
