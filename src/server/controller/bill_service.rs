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
        bill_service::{BillServiceCreatedDto, BillServiceDto, CreateBillServiceDto, UpdateBillServiceDto},
    },
    server::{
        controller::update_response,
        error::AppError,
        model::bill_service::{CreateBillServiceParams, UpdateBillServiceParams},
        service::bill_service::BillServiceRecordService,
        state::AppState,
        util::json,
    },
};

/// Tag for grouping bill service record endpoints in OpenAPI documentation
pub static BILL_SERVICE_TAG: &str = "bill_service";

/// Create a bill service record.
#[utoipa::path(
    post,
    path = "/api/bill-services",
    tag = BILL_SERVICE_TAG,
    request_body = CreateBillServiceDto,
    responses(
        (status = 201, description = "Bill service record created", body = BillServiceCreatedDto),
        (status = 400, description = "Invalid JSON or missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bill_service(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateBillServiceDto = json::from_object(payload?.0)?;

    let params = CreateBillServiceParams::from_dto(payload)?;

    let bill_service = BillServiceRecordService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(BillServiceCreatedDto {
            message: "Bill service record added successfully!".to_string(),
            bill_service_id: bill_service.bill_service_id,
            data: bill_service.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/bill-services",
    tag = BILL_SERVICE_TAG,
    responses(
        (status = 200, description = "All bill services", body = Vec<BillServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bill_services(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let bill_services = BillServiceRecordService::new(&state.db).get_all().await?;

    let dtos: Vec<BillServiceDto> = bill_services.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/bill-services/{bill_service_id}",
    tag = BILL_SERVICE_TAG,
    params(
        ("bill_service_id" = i32, Path, description = "Bill service record ID")
    ),
    responses(
        (status = 200, description = "Bill service record details", body = BillServiceDto),
        (status = 404, description = "Bill service record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bill_service(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(bill_service_id) = path?;
    let bill_service = BillServiceRecordService::new(&state.db)
        .get_by_id(bill_service_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Bill service record not found".to_string()))?;

    Ok((StatusCode::OK, Json(bill_service.into_dto())))
}

/// Update a bill service record.
#[utoipa::path(
    put,
    path = "/api/bill-services/{bill_service_id}",
    tag = BILL_SERVICE_TAG,
    params(
        ("bill_service_id" = i32, Path, description = "Bill service record ID")
    ),
    request_body = UpdateBillServiceDto,
    responses(
        (status = 200, description = "Bill service record updated or nothing to update", body = MessageDto),
        (status = 400, description = "Invalid JSON or unknown field", body = ErrorDto),
        (status = 404, description = "Bill service record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bill_service(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(bill_service_id) = path?;
    let payload: UpdateBillServiceDto = json::from_object(payload?.0)?;

    let params = UpdateBillServiceParams::from_dto(bill_service_id, payload);

    let outcome = BillServiceRecordService::new(&state.db).update(params).await?;

    update_response(outcome, "Bill service record")
}

/// Delete a bill service record.
#[utoipa::path(
    delete,
    path = "/api/bill-services/{bill_service_id}",
    tag = BILL_SERVICE_TAG,
    params(
        ("bill_service_id" = i32, Path, description = "Bill service record ID")
    ),
    responses(
        (status = 200, description = "Bill service record deleted", body = MessageDto),
        (status = 404, description = "Bill service record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bill_service(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(bill_service_id) = path?;
    if !BillServiceRecordService::new(&state.db).delete(bill_service_id).await? {
        return Err(AppError::NotFound("Bill service record not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Bill service record deleted successfully!")),
    ))
}
