//! Billable service domain models and parameters.
//!
//! A service is an extra a guest can be charged for (laundry, room service, spa).

use crate::{
    model::service::{CreateServiceDto, ServiceDto, UpdateServiceDto},
    server::{
        error::AppError,
        util::validate::{optional_text, RequiredFields},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub service_id: i32,
    pub service_name: String,
    pub description: Option<String>,
    pub unit_price: f64,
}

impl Service {
    pub fn from_entity(entity: entity::service::Model) -> Self {
        Self {
            service_id: entity.service_id,
            service_name: entity.service_name,
            description: entity.description,
            unit_price: entity.unit_price,
        }
    }

    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            service_id: self.service_id,
            service_name: self.service_name,
            description: self.description,
            unit_price: self.unit_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServiceParams {
    pub service_name: String,
    pub description: Option<String>,
    pub unit_price: f64,
}

impl CreateServiceParams {
    pub fn from_dto(dto: CreateServiceDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let service_name = required.text("serviceName", dto.service_name);
        let unit_price = required.value("unitPrice", dto.unit_price);
        required.finish()?;

        Ok(Self {
            service_name,
            description: optional_text(dto.description),
            unit_price,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateServiceParams {
    pub service_id: i32,
    pub service_name: Option<String>,
    pub description: Option<Option<String>>,
    pub unit_price: Option<f64>,
}

impl UpdateServiceParams {
    pub fn from_dto(service_id: i32, dto: UpdateServiceDto) -> Self {
        Self {
            service_id,
            service_name: dto.service_name,
            description: dto.description,
            unit_price: dto.unit_price,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.service_name.is_none() && self.description.is_none() && self.unit_price.is_none()
    }
}
