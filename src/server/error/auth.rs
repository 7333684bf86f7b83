use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No account id is stored in the session.
    ///
    /// The caller never logged in, or the session expired or was cleared.
    #[error("No account found in session")]
    AccountNotInSession,

    /// The session references an account that no longer exists.
    ///
    /// # Fields
    /// - Account id read from the session
    #[error("Account {0} from session not found in database")]
    AccountNotInDatabase(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants mean the caller has to log in again, so they map to
/// 401 Unauthorized. The detailed reason is only logged.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Login required".to_string(),
            }),
        )
            .into_response()
    }
}
