use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::{non_null, nullable};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    #[serde(rename = "paymentID")]
    pub payment_id: i32,
    #[serde(rename = "billID")]
    pub bill_id: i32,
    pub payment_method: String,
    pub payment_date: NaiveDate,
    pub amount_paid: f64,
    #[serde(rename = "transactionID")]
    pub transaction_id: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    #[serde(rename = "billID")]
    pub bill_id: Option<i32>,
    pub payment_method: Option<String>,
    pub payment_date: Option<NaiveDate>,
    pub amount_paid: Option<f64>,
    #[serde(rename = "transactionID")]
    pub transaction_id: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePaymentDto {
    #[serde(rename = "billID", default, deserialize_with = "non_null")]
    pub bill_id: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "non_null")]
    pub amount_paid: Option<f64>,
    #[serde(
        rename = "transactionID",
        default,
        deserialize_with = "nullable"
    )]
    #[schema(value_type = Option<String>)]
    pub transaction_id: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaymentCreatedDto {
    pub message: String,
    #[serde(rename = "paymentID")]
    pub payment_id: i32,
    pub data: PaymentDto,
}
