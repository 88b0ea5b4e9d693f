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
        staff::{CreateStaffDto, StaffCreatedDto, StaffDto, UpdateStaffDto},
    },
    server::{
        controller::update_response,
        error::AppError,
        model::staff::{CreateStaffParams, UpdateStaffParams},
        service::staff::StaffService,
        state::AppState,
        util::json,
    },
};

/// Tag for grouping staff member endpoints in OpenAPI documentation
pub static STAFF_TAG: &str = "staff";

/// Create a staff member.
///
/// Checks that every required field is present and non-empty, inserts the row and
/// returns it together with its new ID. The supplied password is hashed before insert and
/// never returned.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Staff member fields; must be a JSON object
///
/// # Returns
/// - `201 Created` - Staff member created
/// - `400 Bad Request` - Body is not a JSON object or required fields are missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/staff",
    tag = STAFF_TAG,
    request_body = CreateStaffDto,
    responses(
        (status = 201, description = "Staff member created", body = StaffCreatedDto),
        (status = 400, description = "Invalid JSON or missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_staff_member(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateStaffDto = json::from_object(payload?.0)?;

    let params = CreateStaffParams::from_dto(payload)?;

    let staff_member = StaffService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(StaffCreatedDto {
            message: "Staff member added successfully!".to_string(),
            staff_id: staff_member.staff_id,
            data: staff_member.into_dto(),
        }),
    ))
}

/// Get all staff.
///
/// Returns every staff member ordered by ID. Password hashes are never included.
///
/// # Returns
/// - `200 OK` - List of staff
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/staff",
    tag = STAFF_TAG,
    responses(
        (status = 200, description = "All staff", body = Vec<StaffDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let staff = StaffService::new(&state.db).get_all().await?;

    let dtos: Vec<StaffDto> = staff.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a staff member by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `staff_id` - Staff member ID to fetch
///
/// # Returns
/// - `200 OK` - Staff member details
/// - `404 Not Found` - No staff member with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/staff/{staff_id}",
    tag = STAFF_TAG,
    params(
        ("staff_id" = i32, Path, description = "Staff member ID")
    ),
    responses(
        (status = 200, description = "Staff member details", body = StaffDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff_member(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(staff_id) = path?;
    let staff_member = StaffService::new(&state.db)
        .get_by_id(staff_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Staff member not found".to_string()))?;

    Ok((StatusCode::OK, Json(staff_member.into_dto())))
}

/// Update a staff member.
///
/// Writes only the fields present in the body. Keys outside the updatable set are
/// rejected, and nullable columns can be cleared with `null`. A supplied `password`
/// replaces the stored hash.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `staff_id` - Staff member ID to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Staff member updated, or no fields were supplied
/// - `400 Bad Request` - Invalid JSON or unknown field
/// - `404 Not Found` - No staff member with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/staff/{staff_id}",
    tag = STAFF_TAG,
    params(
        ("staff_id" = i32, Path, description = "Staff member ID")
    ),
    request_body = UpdateStaffDto,
    responses(
        (status = 200, description = "Staff member updated or nothing to update", body = MessageDto),
        (status = 400, description = "Invalid JSON or unknown field", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_staff_member(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(staff_id) = path?;
    let payload: UpdateStaffDto = json::from_object(payload?.0)?;

    let params = UpdateStaffParams::from_dto(staff_id, payload)?;

    let outcome = StaffService::new(&state.db).update(params).await?;

    update_response(outcome, "Staff member")
}

/// Delete a staff member.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `staff_id` - Staff member ID to delete
///
/// # Returns
/// - `200 OK` - Staff member deleted
/// - `404 Not Found` - No staff member with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/staff/{staff_id}",
    tag = STAFF_TAG,
    params(
        ("staff_id" = i32, Path, description = "Staff member ID")
    ),
    responses(
        (status = 200, description = "Staff member deleted", body = MessageDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_staff_member(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(staff_id) = path?;
    if !StaffService::new(&state.db).delete(staff_id).await? {
        return Err(AppError::NotFound("Staff member not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Staff member deleted successfully!")),
    ))
}
