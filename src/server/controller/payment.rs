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
        payment::{CreatePaymentDto, PaymentCreatedDto, PaymentDto, UpdatePaymentDto},
    },
    server::{
        controller::update_response,
        error::AppError,
        model::payment::{CreatePaymentParams, UpdatePaymentParams},
        service::payment::PaymentService,
        state::AppState,
        util::json,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Create a payment.
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment created", body = PaymentCreatedDto),
        (status = 400, description = "Invalid JSON or missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreatePaymentDto = json::from_object(payload?.0)?;

    let params = CreatePaymentParams::from_dto(payload)?;

    let payment = PaymentService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(PaymentCreatedDto {
            message: "Payment added successfully!".to_string(),
            payment_id: payment.payment_id,
            data: payment.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "All payments", body = Vec<PaymentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let payments = PaymentService::new(&state.db).get_all().await?;

    let dtos: Vec<PaymentDto> = payments.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/payments/{payment_id}",
    tag = PAYMENT_TAG,
    params(
        ("payment_id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment details", body = PaymentDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(payment_id) = path?;
    let payment = PaymentService::new(&state.db)
        .get_by_id(payment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}

/// Update a payment.
#[utoipa::path(
    put,
    path = "/api/payments/{payment_id}",
    tag = PAYMENT_TAG,
    params(
        ("payment_id" = i32, Path, description = "Payment ID")
    ),
    request_body = UpdatePaymentDto,
    responses(
        (status = 200, description = "Payment updated or nothing to update", body = MessageDto),
        (status = 400, description = "Invalid JSON or unknown field", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(payment_id) = path?;
    let payload: UpdatePaymentDto = json::from_object(payload?.0)?;

    let params = UpdatePaymentParams::from_dto(payment_id, payload);

    let outcome = PaymentService::new(&state.db).update(params).await?;

    update_response(outcome, "Payment")
}

/// Delete a payment.
#[utoipa::path(
    delete,
    path = "/api/payments/{payment_id}",
    tag = PAYMENT_TAG,
    params(
        ("payment_id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment deleted", body = MessageDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(payment_id) = path?;
    if !PaymentService::new(&state.db).delete(payment_id).await? {
        return Err(AppError::NotFound("Payment not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Payment deleted successfully!")),
    ))
}
