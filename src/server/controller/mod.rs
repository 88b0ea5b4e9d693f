//! HTTP request handlers.
//!
//! One module per resource. Handlers extract the path and body, convert DTOs into
//! parameter models, call the service layer and convert the result back into DTOs.
//! JSON body rejections are taken as `Result` so they surface through `AppError` with
//! the same error body as every other failure.

use axum::{http::StatusCode, Json};

use crate::{
    model::api::MessageDto,
    server::{error::AppError, model::UpdateOutcome},
};

pub mod auth;
pub mod bill_service;
pub mod billing;
pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod service;
pub mod staff;

#[cfg(test)]
mod test;

/// Maps an update outcome to the response shared by every update endpoint.
///
/// `label` is the display name used in messages, e.g. "Room type".
pub(crate) fn update_response(
    outcome: UpdateOutcome,
    label: &str,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    match outcome {
        UpdateOutcome::NotFound => Err(AppError::NotFound(format!("{} not found", label))),
        UpdateOutcome::Unchanged => Ok((StatusCode::OK, Json(MessageDto::new("No fields to update.")))),
        UpdateOutcome::Updated => Ok((
            StatusCode::OK,
            Json(MessageDto::new(format!("{} updated successfully!", label))),
        )),
    }
}
