use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto},
    },
    server::{
        error::AppError,
        service::auth::AuthService,
        state::AppState,
        util::{json, validate::RequiredFields},
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Check a staff member's username and password.
///
/// Verifies the password against the stored Argon2 hash. An unknown username and a
/// wrong password produce the same response. No session is created; the response only
/// identifies the staff member and their role.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Username and password
///
/// # Returns
/// - `200 OK` - Credentials valid
/// - `400 Bad Request` - Invalid JSON or missing username/password
/// - `401 Unauthorized` - Invalid username or password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 400, description = "Invalid JSON or missing fields", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: LoginDto = json::from_object(payload?.0)?;

    let mut required = RequiredFields::new();
    let username = required.text("username", payload.username);
    let password = required.text("password", payload.password);
    required.finish()?;

    let staff = AuthService::new(&state.db)
        .login(&username, &password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "Login successful!".to_string(),
            staff_id: staff.staff_id,
            username: staff.username,
            role: staff.role,
        }),
    ))
}
