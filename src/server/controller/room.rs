use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        room::{
            AvailableRoomDto, AvailableRoomsQuery, CreateRoomDto, RoomCreatedDto, RoomDetailsDto,
            RoomDto, UpdateRoomDto,
        },
    },
    server::{
        controller::update_response,
        error::AppError,
        model::room::{CreateRoomParams, UpdateRoomParams},
        service::room::RoomService,
        state::AppState,
        util::json,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// Create a room.
///
/// Rooms are keyed by `roomNumber`, which the client assigns and may send either as a
/// string or as a number.
///
/// # Returns
/// - `201 Created` - Room created
/// - `400 Bad Request` - Invalid JSON or missing required fields
/// - `500 Internal Server Error` - Database error, including a duplicate room number
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomCreatedDto),
        (status = 400, description = "Invalid JSON or missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateRoomDto = json::from_object(payload?.0)?;

    let params = CreateRoomParams::from_dto(payload)?;

    let room = RoomService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(RoomCreatedDto {
            message: "Room added successfully!".to_string(),
            room_number: room.room_number.clone(),
            data: room.into_dto(),
        }),
    ))
}

/// Get all rooms ordered by room number.
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "All rooms", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db).get_all().await?;

    let dtos: Vec<RoomDto> = rooms.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get all rooms with their room type.
///
/// Each entry adds the room type's name and base price to the room's own columns.
///
/// # Returns
/// - `200 OK` - Joined room listing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/rooms-details",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "Rooms joined with their room type", body = Vec<RoomDetailsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms_details(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db).get_all_with_details().await?;

    let dtos: Vec<RoomDetailsDto> = rooms.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get available rooms of a room type.
///
/// Returns the numbers of rooms whose type matches `roomTypeId` and whose status is
/// exactly `Available`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Query string carrying `roomTypeId`
///
/// # Returns
/// - `200 OK` - Matching room numbers, possibly empty
/// - `400 Bad Request` - `roomTypeId` missing or not an integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/rooms/available",
    tag = ROOM_TAG,
    params(AvailableRoomsQuery),
    responses(
        (status = 200, description = "Available rooms of the given type", body = Vec<AvailableRoomDto>),
        (status = 400, description = "Missing or invalid roomTypeId", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_rooms(
    State(state): State<AppState>,
    query: Result<Query<AvailableRoomsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let room_type_id = match query.room_type_id.as_deref().map(str::trim) {
        None | Some("") => {
            return Err(AppError::BadRequest(
                "Missing roomTypeId parameter.".to_string(),
            ))
        }
        Some(raw) => raw.parse::<i32>().map_err(|_| {
            AppError::BadRequest("Invalid roomTypeId parameter.".to_string())
        })?,
    };

    let rooms = RoomService::new(&state.db)
        .get_available(room_type_id)
        .await?;

    let dtos: Vec<AvailableRoomDto> = rooms
        .into_iter()
        .map(|r| r.into_available_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{room_number}",
    tag = ROOM_TAG,
    params(
        ("room_number" = String, Path, description = "Room number")
    ),
    responses(
        (status = 200, description = "Room details", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db)
        .get_by_id(&room_number)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Update a room.
///
/// The room number is taken from the path and cannot be changed.
#[utoipa::path(
    put,
    path = "/api/rooms/{room_number}",
    tag = ROOM_TAG,
    params(
        ("room_number" = String, Path, description = "Room number")
    ),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Room updated or nothing to update", body = MessageDto),
        (status = 400, description = "Invalid JSON or unknown field", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(room_number): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: UpdateRoomDto = json::from_object(payload?.0)?;

    let params = UpdateRoomParams::from_dto(room_number, payload);

    let outcome = RoomService::new(&state.db).update(params).await?;

    update_response(outcome, "Room")
}

/// Delete a room.
///
/// Fails with a database error while reservations still reference the room.
#[utoipa::path(
    delete,
    path = "/api/rooms/{room_number}",
    tag = ROOM_TAG,
    params(
        ("room_number" = String, Path, description = "Room number")
    ),
    responses(
        (status = 200, description = "Room deleted", body = MessageDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(room_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !RoomService::new(&state.db).delete(&room_number).await? {
        return Err(AppError::NotFound("Room not found".to_string()));
    }

    Ok((StatusCode::OK, Json(MessageDto::new("Room deleted successfully!"))))
}
