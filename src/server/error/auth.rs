use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Username is unknown or the password does not match its stored hash.
    ///
    /// Both cases share one variant so the response never reveals which part of the
    /// credentials was wrong. Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For `InvalidCredentials`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid username or password")),
            )
                .into_response(),
        }
    }
}
