use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of reservation and membership operations that callers can act on.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReservationError {
    /// Referenced reservation, court, invitation code or membership does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Caller lacks the role the operation needs (member, manager or invitee).
    #[error("{0}")]
    NoPermission(String),

    /// Request failed validation, such as a start in the past or an empty range.
    #[error("{0}")]
    IllegalInput(String),

    /// Requested time range overlaps a live reservation on the same court.
    #[error("Court is already reserved for the requested time")]
    CourtReserved,

    /// Reservation has no vacancy left to join.
    #[error("Reservation is full")]
    ReservationFull,
}

impl ReservationError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NoPermission(_) => StatusCode::FORBIDDEN,
            Self::IllegalInput(_) => StatusCode::BAD_REQUEST,
            Self::CourtReserved | Self::ReservationFull => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
