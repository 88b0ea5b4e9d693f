use axum::{
    body::Bytes,
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
        reservation::{
            CreateReservationDto, ReservationCreatedDto, ReservationDto, UpdateReservationDto,
            UpdateReservationStatusDto,
        },
    },
    server::{
        controller::update_response,
        error::AppError,
        model::reservation::{CreateReservationParams, UpdateReservationParams},
        service::reservation::ReservationService,
        state::AppState,
        util::json,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Create a reservation.
///
/// # Returns
/// - `201 Created` - Reservation created
/// - `400 Bad Request` - Invalid JSON or missing required fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationCreatedDto),
        (status = 400, description = "Invalid JSON or missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateReservationDto = json::from_object(payload?.0)?;

    let params = CreateReservationParams::from_dto(payload)?;

    let reservation = ReservationService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationCreatedDto {
            message: "Reservation added successfully!".to_string(),
            reservation_id: reservation.reservation_id,
            data: reservation.into_dto(),
        }),
    ))
}

/// Get all reservations ordered by ID.
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = Vec<ReservationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db).get_all().await?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a reservation by ID.
#[utoipa::path(
    get,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation details", body = ReservationDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(reservation_id) = path?;
    let reservation = ReservationService::new(&state.db)
        .get_by_id(reservation_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Update a reservation.
///
/// Only the supplied fields are written; an existing reservation with no fields supplied
/// is left untouched.
#[utoipa::path(
    put,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Reservation updated or nothing to update", body = MessageDto),
        (status = 400, description = "Invalid JSON or unknown field", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(reservation_id) = path?;
    let payload: UpdateReservationDto = json::from_object(payload?.0)?;

    let params = UpdateReservationParams::from_dto(reservation_id, payload);

    let outcome = ReservationService::new(&state.db).update(params).await?;

    update_response(outcome, "Reservation")
}

/// Delete a reservation.
#[utoipa::path(
    delete,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(reservation_id) = path?;
    if !ReservationService::new(&state.db).delete(reservation_id).await? {
        return Err(AppError::NotFound("Reservation not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Reservation deleted successfully!")),
    ))
}

/// Move a reservation to a new status.
///
/// The body is optional. When it is empty or omits `new_status`, the reservation is
/// checked out. No transition rules are enforced between statuses.
///
/// # Returns
/// - `200 OK` - Status written
/// - `400 Bad Request` - Body present but not valid JSON
/// - `404 Not Found` - No reservation with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/reservations/{reservation_id}/status",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    request_body(content = UpdateReservationStatusDto, description = "Target status, defaults to Checked-out"),
    responses(
        (status = 200, description = "Reservation status updated", body = MessageDto),
        (status = 400, description = "Invalid JSON", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation_status(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let Path(reservation_id) = path?;
    let payload: UpdateReservationStatusDto = if body.iter().all(u8::is_ascii_whitespace) {
        UpdateReservationStatusDto::default()
    } else {
        json::from_slice(&body)?
    };

    let reservation = ReservationService::new(&state.db)
        .update_status(reservation_id, payload.new_status)
        .await?
        .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

    let status = reservation.reservation_status.unwrap_or_default();

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "Reservation {} status updated to {}!",
            reservation_id, status
        ))),
    ))
}
