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
        service::{CreateServiceDto, ServiceCreatedDto, ServiceDto, UpdateServiceDto},
    },
    server::{
        controller::update_response,
        error::AppError,
        model::service::{CreateServiceParams, UpdateServiceParams},
        service::service::ServiceCatalogService,
        state::AppState,
        util::json,
    },
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

/// Create a service.
#[utoipa::path(
    post,
    path = "/api/services",
    tag = SERVICE_TAG,
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Service created", body = ServiceCreatedDto),
        (status = 400, description = "Invalid JSON or missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateServiceDto = json::from_object(payload?.0)?;

    let params = CreateServiceParams::from_dto(payload)?;

    let service = ServiceCatalogService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ServiceCreatedDto {
            message: "Service added successfully!".to_string(),
            service_id: service.service_id,
            data: service.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/services",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "All services", body = Vec<ServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let services = ServiceCatalogService::new(&state.db).get_all().await?;

    let dtos: Vec<ServiceDto> = services.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/services/{service_id}",
    tag = SERVICE_TAG,
    params(
        ("service_id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service details", body = ServiceDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(service_id) = path?;
    let service = ServiceCatalogService::new(&state.db)
        .get_by_id(service_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

/// Update a service.
#[utoipa::path(
    put,
    path = "/api/services/{service_id}",
    tag = SERVICE_TAG,
    params(
        ("service_id" = i32, Path, description = "Service ID")
    ),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Service updated or nothing to update", body = MessageDto),
        (status = 400, description = "Invalid JSON or unknown field", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(service_id) = path?;
    let payload: UpdateServiceDto = json::from_object(payload?.0)?;

    let params = UpdateServiceParams::from_dto(service_id, payload);

    let outcome = ServiceCatalogService::new(&state.db).update(params).await?;

    update_response(outcome, "Service")
}

/// Delete a service.
#[utoipa::path(
    delete,
    path = "/api/services/{service_id}",
    tag = SERVICE_TAG,
    params(
        ("service_id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service deleted", body = MessageDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(service_id) = path?;
    if !ServiceCatalogService::new(&state.db).delete(service_id).await? {
        return Err(AppError::NotFound("Service not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Service deleted successfully!")),
    ))
}
