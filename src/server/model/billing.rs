//! Bill domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::billing::{BillDto, CreateBillDto, UpdateBillDto},
    server::{
        error::AppError,
        util::validate::{optional_text, RequiredFields},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub bill_id: i32,
    pub reservation_id: i32,
    pub bill_date: NaiveDate,
    pub sub_total: Option<f64>,
    pub tax_amount: Option<f64>,
    pub total_amount: f64,
    pub payment_status: Option<String>,
}

impl Bill {
    pub fn from_entity(entity: entity::billing::Model) -> Self {
        Self {
            bill_id: entity.bill_id,
            reservation_id: entity.reservation_id,
            bill_date: entity.bill_date,
            sub_total: entity.sub_total,
            tax_amount: entity.tax_amount,
            total_amount: entity.total_amount,
            payment_status: entity.payment_status,
        }
    }

    pub fn into_dto(self) -> BillDto {
        BillDto {
            bill_id: self.bill_id,
            reservation_id: self.reservation_id,
            bill_date: self.bill_date,
            sub_total: self.sub_total,
            tax_amount: self.tax_amount,
            total_amount: self.total_amount,
            payment_status: self.payment_status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBillParams {
    pub reservation_id: i32,
    pub bill_date: NaiveDate,
    pub sub_total: Option<f64>,
    pub tax_amount: Option<f64>,
    pub total_amount: f64,
    pub payment_status: Option<String>,
}

impl CreateBillParams {
    /// Totals are stored as supplied; nothing is recomputed from subTotal and taxAmount.
    pub fn from_dto(dto: CreateBillDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let reservation_id = required.value("reservationID", dto.reservation_id);
        let bill_date = required.value("billDate", dto.bill_date);
        let total_amount = required.value("totalAmount", dto.total_amount);
        required.finish()?;

        Ok(Self {
            reservation_id,
            bill_date,
            sub_total: dto.sub_total,
            tax_amount: dto.tax_amount,
            total_amount,
            payment_status: optional_text(dto.payment_status),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBillParams {
    pub bill_id: i32,
    pub reservation_id: Option<i32>,
    pub bill_date: Option<NaiveDate>,
    pub sub_total: Option<Option<f64>>,
    pub tax_amount: Option<Option<f64>>,
    pub total_amount: Option<f64>,
    pub payment_status: Option<Option<String>>,
}

impl UpdateBillParams {
    pub fn from_dto(bill_id: i32, dto: UpdateBillDto) -> Self {
        Self {
            bill_id,
            reservation_id: dto.reservation_id,
            bill_date: dto.bill_date,
            sub_total: dto.sub_total,
            tax_amount: dto.tax_amount,
            total_amount: dto.total_amount,
            payment_status: dto.payment_status,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reservation_id.is_none()
            && self.bill_date.is_none()
            && self.sub_total.is_none()
            && self.tax_amount.is_none()
            && self.total_amount.is_none()
            && self.payment_status.is_none()
    }
}
