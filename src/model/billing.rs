use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::{non_null, nullable};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillDto {
    #[serde(rename = "billID")]
    pub bill_id: i32,
    #[serde(rename = "reservationID")]
    pub reservation_id: i32,
    pub bill_date: NaiveDate,
    pub sub_total: Option<f64>,
    pub tax_amount: Option<f64>,
    pub total_amount: f64,
    pub payment_status: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillDto {
    #[serde(rename = "reservationID")]
    pub reservation_id: Option<i32>,
    pub bill_date: Option<NaiveDate>,
    pub sub_total: Option<f64>,
    pub tax_amount: Option<f64>,
    pub total_amount: Option<f64>,
    pub payment_status: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBillDto {
    #[serde(rename = "reservationID", default, deserialize_with = "non_null")]
    pub reservation_id: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub bill_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>)]
    pub sub_total: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>)]
    pub tax_amount: Option<Option<f64>>,
    #[serde(default, deserialize_with = "non_null")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub payment_status: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BillCreatedDto {
    pub message: String,
    #[serde(rename = "billID")]
    pub bill_id: i32,
    pub data: BillDto,
}
