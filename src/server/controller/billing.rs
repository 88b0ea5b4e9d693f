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
        billing::{BillCreatedDto, BillDto, CreateBillDto, UpdateBillDto},
    },
    server::{
        controller::update_response,
        error::AppError,
        model::billing::{CreateBillParams, UpdateBillParams},
        service::billing::BillingService,
        state::AppState,
        util::json,
    },
};

/// Tag for grouping bill endpoints in OpenAPI documentation
pub static BILLING_TAG: &str = "billing";

/// Create a bill.
#[utoipa::path(
    post,
    path = "/api/billing",
    tag = BILLING_TAG,
    request_body = CreateBillDto,
    responses(
        (status = 201, description = "Bill created", body = BillCreatedDto),
        (status = 400, description = "Invalid JSON or missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bill(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateBillDto = json::from_object(payload?.0)?;

    let params = CreateBillParams::from_dto(payload)?;

    let bill = BillingService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(BillCreatedDto {
            message: "Bill added successfully!".to_string(),
            bill_id: bill.bill_id,
            data: bill.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/billing",
    tag = BILLING_TAG,
    responses(
        (status = 200, description = "All bills", body = Vec<BillDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bills = BillingService::new(&state.db).get_all().await?;

    let dtos: Vec<BillDto> = bills.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/billing/{bill_id}",
    tag = BILLING_TAG,
    params(
        ("bill_id" = i32, Path, description = "Bill ID")
    ),
    responses(
        (status = 200, description = "Bill details", body = BillDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bill(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(bill_id) = path?;
    let bill = BillingService::new(&state.db)
        .get_by_id(bill_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Bill not found".to_string()))?;

    Ok((StatusCode::OK, Json(bill.into_dto())))
}

/// Update a bill.
#[utoipa::path(
    put,
    path = "/api/billing/{bill_id}",
    tag = BILLING_TAG,
    params(
        ("bill_id" = i32, Path, description = "Bill ID")
    ),
    request_body = UpdateBillDto,
    responses(
        (status = 200, description = "Bill updated or nothing to update", body = MessageDto),
        (status = 400, description = "Invalid JSON or unknown field", body = ErrorDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bill(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(bill_id) = path?;
    let payload: UpdateBillDto = json::from_object(payload?.0)?;

    let params = UpdateBillParams::from_dto(bill_id, payload);

    let outcome = BillingService::new(&state.db).update(params).await?;

    update_response(outcome, "Bill")
}

/// Delete a bill.
#[utoipa::path(
    delete,
    path = "/api/billing/{bill_id}",
    tag = BILLING_TAG,
    params(
        ("bill_id" = i32, Path, description = "Bill ID")
    ),
    responses(
        (status = 200, description = "Bill deleted", body = MessageDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bill(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(bill_id) = path?;
    if !BillingService::new(&state.db).delete(bill_id).await? {
        return Err(AppError::NotFound("Bill not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Bill deleted successfully!")),
    ))
}
