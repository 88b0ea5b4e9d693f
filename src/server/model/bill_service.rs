//! Bill service records: the junction between a bill and the services charged to it.

use crate::{
    model::bill_service::{BillServiceDto, CreateBillServiceDto, UpdateBillServiceDto},
    server::{error::AppError, util::validate::RequiredFields},
};

#[derive(Debug, Clone, PartialEq)]
pub struct BillServiceRecord {
    pub bill_service_id: i32,
    pub bill_id: i32,
    pub service_id: i32,
    pub quantity: i32,
    pub total_service_price: Option<f64>,
}

impl BillServiceRecord {
    pub fn from_entity(entity: entity::bill_service::Model) -> Self {
        Self {
            bill_service_id: entity.bill_service_id,
            bill_id: entity.bill_id,
            service_id: entity.service_id,
            quantity: entity.quantity,
            total_service_price: entity.total_service_price,
        }
    }

    pub fn into_dto(self) -> BillServiceDto {
        BillServiceDto {
            bill_service_id: self.bill_service_id,
            bill_id: self.bill_id,
            service_id: self.service_id,
            quantity: self.quantity,
            total_service_price: self.total_service_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBillServiceParams {
    pub bill_id: i32,
    pub service_id: i32,
    pub quantity: i32,
    pub total_service_price: Option<f64>,
}

impl CreateBillServiceParams {
    /// The service total is stored as supplied rather than derived from the unit price.
    pub fn from_dto(dto: CreateBillServiceDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let bill_id = required.value("billID", dto.bill_id);
        let service_id = required.value("serviceID", dto.service_id);
        let quantity = required.value("quantity", dto.quantity);
        required.finish()?;

        Ok(Self {
            bill_id,
            service_id,
            quantity,
            total_service_price: dto.total_service_price,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBillServiceParams {
    pub bill_service_id: i32,
    pub bill_id: Option<i32>,
    pub service_id: Option<i32>,
    pub quantity: Option<i32>,
    pub total_service_price: Option<Option<f64>>,
}

impl UpdateBillServiceParams {
    pub fn from_dto(bill_service_id: i32, dto: UpdateBillServiceDto) -> Self {
        Self {
            bill_service_id,
            bill_id: dto.bill_id,
            service_id: dto.service_id,
            quantity: dto.quantity,
            total_service_price: dto.total_service_price,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bill_id.is_none()
            && self.service_id.is_none()
            && self.quantity.is_none()
            && self.total_service_price.is_none()
    }
}
