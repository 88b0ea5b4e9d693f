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
        room_type::{CreateRoomTypeDto, RoomTypeCreatedDto, RoomTypeDto, UpdateRoomTypeDto},
    },
    server::{
        controller::update_response,
        error::AppError,
        model::room_type::{CreateRoomTypeParams, UpdateRoomTypeParams},
        service::room_type::RoomTypeService,
        state::AppState,
        util::json,
    },
};

/// Tag for grouping room type endpoints in OpenAPI documentation
pub static ROOM_TYPE_TAG: &str = "room_type";

/// Create a room type.
///
/// # Returns
/// - `201 Created` - Room type created
/// - `400 Bad Request` - Invalid JSON or missing required fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/room-types",
    tag = ROOM_TYPE_TAG,
    request_body = CreateRoomTypeDto,
    responses(
        (status = 201, description = "Room type created", body = RoomTypeCreatedDto),
        (status = 400, description = "Invalid JSON or missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room_type(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateRoomTypeDto = json::from_object(payload?.0)?;

    let params = CreateRoomTypeParams::from_dto(payload)?;

    let room_type = RoomTypeService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(RoomTypeCreatedDto {
            message: "Room type added successfully!".to_string(),
            room_type_id: room_type.room_type_id,
            data: room_type.into_dto(),
        }),
    ))
}

/// Get all room types ordered by ID.
#[utoipa::path(
    get,
    path = "/api/room-types",
    tag = ROOM_TYPE_TAG,
    responses(
        (status = 200, description = "All room types", body = Vec<RoomTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let room_types = RoomTypeService::new(&state.db).get_all().await?;

    let dtos: Vec<RoomTypeDto> = room_types.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a room type by ID.
#[utoipa::path(
    get,
    path = "/api/room-types/{room_type_id}",
    tag = ROOM_TYPE_TAG,
    params(
        ("room_type_id" = i32, Path, description = "Room type ID")
    ),
    responses(
        (status = 200, description = "Room type details", body = RoomTypeDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_type(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(room_type_id) = path?;
    let room_type = RoomTypeService::new(&state.db)
        .get_by_id(room_type_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))?;

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}

/// Update a room type.
///
/// Only the supplied fields are written; an existing room type with no fields supplied
/// is left untouched.
#[utoipa::path(
    put,
    path = "/api/room-types/{room_type_id}",
    tag = ROOM_TYPE_TAG,
    params(
        ("room_type_id" = i32, Path, description = "Room type ID")
    ),
    request_body = UpdateRoomTypeDto,
    responses(
        (status = 200, description = "Room type updated or nothing to update", body = MessageDto),
        (status = 400, description = "Invalid JSON or unknown field", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room_type(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(room_type_id) = path?;
    let payload: UpdateRoomTypeDto = json::from_object(payload?.0)?;

    let params = UpdateRoomTypeParams::from_dto(room_type_id, payload);

    let outcome = RoomTypeService::new(&state.db).update(params).await?;

    update_response(outcome, "Room type")
}

/// Delete a room type.
#[utoipa::path(
    delete,
    path = "/api/room-types/{room_type_id}",
    tag = ROOM_TYPE_TAG,
    params(
        ("room_type_id" = i32, Path, description = "Room type ID")
    ),
    responses(
        (status = 200, description = "Room type deleted", body = MessageDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room_type(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(room_type_id) = path?;
    if !RoomTypeService::new(&state.db).delete(room_type_id).await? {
        return Err(AppError::NotFound("Room type not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Room type deleted successfully!")),
    ))
}
