//! Payment domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::payment::{CreatePaymentDto, PaymentDto, UpdatePaymentDto},
    server::{
        error::AppError,
        util::validate::{optional_text, RequiredFields},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub payment_id: i32,
    pub bill_id: i32,
    pub payment_method: String,
    pub payment_date: NaiveDate,
    pub amount_paid: f64,
    pub transaction_id: Option<String>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            payment_id: entity.payment_id,
            bill_id: entity.bill_id,
            payment_method: entity.payment_method,
            payment_date: entity.payment_date,
            amount_paid: entity.amount_paid,
            transaction_id: entity.transaction_id,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            payment_id: self.payment_id,
            bill_id: self.bill_id,
            payment_method: self.payment_method,
            payment_date: self.payment_date,
            amount_paid: self.amount_paid,
            transaction_id: self.transaction_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub bill_id: i32,
    pub payment_method: String,
    pub payment_date: NaiveDate,
    pub amount_paid: f64,
    pub transaction_id: Option<String>,
}

impl CreatePaymentParams {
    pub fn from_dto(dto: CreatePaymentDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let bill_id = required.value("billID", dto.bill_id);
        let payment_method = required.text("paymentMethod", dto.payment_method);
        let payment_date = required.value("paymentDate", dto.payment_date);
        let amount_paid = required.value("amountPaid", dto.amount_paid);
        required.finish()?;

        Ok(Self {
            bill_id,
            payment_method,
            payment_date,
            amount_paid,
            transaction_id: optional_text(dto.transaction_id),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePaymentParams {
    pub payment_id: i32,
    pub bill_id: Option<i32>,
    pub payment_method: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub amount_paid: Option<f64>,
    pub transaction_id: Option<Option<String>>,
}

impl UpdatePaymentParams {
    pub fn from_dto(payment_id: i32, dto: UpdatePaymentDto) -> Self {
        Self {
            payment_id,
            bill_id: dto.bill_id,
            payment_method: dto.payment_method,
            payment_date: dto.payment_date,
            amount_paid: dto.amount_paid,
            transaction_id: dto.transaction_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bill_id.is_none()
            && self.payment_method.is_none()
            && self.payment_date.is_none()
            && self.amount_paid.is_none()
            && self.transaction_id.is_none()
    }
}
