use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        guest::{CreateGuestDto, GuestCreatedDto, GuestDto, UpdateGuestDto},
    },
    server::{
        controller::update_response,
        error::AppError,
        model::guest::{CreateGuestParams, UpdateGuestParams},
        service::guest::GuestService,
        state::AppState,
        util::json,
    },
};

/// Tag for grouping guest endpoints in OpenAPI documentation
pub static GUEST_TAG: &str = "guest";

/// Create a guest.
///
/// Checks that every required field is present and non-empty, inserts the row and
/// returns it together with its new ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Guest fields; must be a JSON object
///
/// # Returns
/// - `201 Created` - Guest created
/// - `400 Bad Request` - Body is not a JSON object or required fields are missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/guests",
    tag = GUEST_TAG,
    request_body = CreateGuestDto,
    responses(
        (status = 201, description = "Guest created", body = GuestCreatedDto),
        (status = 400, description = "Invalid JSON or missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_guest(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateGuestDto = json::from_object(payload?.0)?;

    let params = CreateGuestParams::from_dto(payload)?;

    let guest = GuestService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(GuestCreatedDto {
            message: "Guest added successfully!".to_string(),
            guest_id: guest.guest_id,
            data: guest.into_dto(),
        }),
    ))
}

/// Get all guests.
///
/// Returns every guest ordered by ID.
///
/// # Returns
/// - `200 OK` - List of guests
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guests",
    tag = GUEST_TAG,
    responses(
        (status = 200, description = "All guests", body = Vec<GuestDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guests(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let guests = GuestService::new(&state.db).get_all().await?;

    let dtos: Vec<GuestDto> = guests.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a guest by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `guest_id` - Guest ID to fetch
///
/// # Returns
/// - `200 OK` - Guest details
/// - `404 Not Found` - No guest with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guests/{guest_id}",
    tag = GUEST_TAG,
    params(
        ("guest_id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Guest details", body = GuestDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guest(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(guest_id) = path?;
    let guest = GuestService::new(&state.db)
        .get_by_id(guest_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))?;

    Ok((StatusCode::OK, Json(guest.into_dto())))
}

/// Update a guest.
///
/// Writes only the fields present in the body. Keys outside the updatable set are
/// rejected, and nullable columns can be cleared with `null`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `guest_id` - Guest ID to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Guest updated, or no fields were supplied
/// - `400 Bad Request` - Invalid JSON or unknown field
/// - `404 Not Found` - No guest with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/guests/{guest_id}",
    tag = GUEST_TAG,
    params(
        ("guest_id" = i32, Path, description = "Guest ID")
    ),
    request_body = UpdateGuestDto,
    responses(
        (status = 200, description = "Guest updated or nothing to update", body = MessageDto),
        (status = 400, description = "Invalid JSON or unknown field", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_guest(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(guest_id) = path?;
    let payload: UpdateGuestDto = json::from_object(payload?.0)?;

    let params = UpdateGuestParams::from_dto(guest_id, payload);

    let outcome = GuestService::new(&state.db).update(params).await?;

    update_response(outcome, "Guest")
}

/// Delete a guest.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `guest_id` - Guest ID to delete
///
/// # Returns
/// - `200 OK` - Guest deleted
/// - `404 Not Found` - No guest with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/guests/{guest_id}",
    tag = GUEST_TAG,
    params(
        ("guest_id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Guest deleted", body = MessageDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_guest(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(guest_id) = path?;
    if !GuestService::new(&state.db).delete(guest_id).await? {
        return Err(AppError::NotFound("Guest not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Guest deleted successfully!")),
    ))
}
