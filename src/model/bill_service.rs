use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::{non_null, nullable};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillServiceDto {
    #[serde(rename = "billServiceID")]
    pub bill_service_id: i32,
    #[serde(rename = "billID")]
    pub bill_id: i32,
    #[serde(rename = "serviceID")]
    pub service_id: i32,
    pub quantity: i32,
    pub total_service_price: Option<f64>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillServiceDto {
    #[serde(rename = "billID")]
    pub bill_id: Option<i32>,
    #[serde(rename = "serviceID")]
    pub service_id: Option<i32>,
    pub quantity: Option<i32>,
    pub total_service_price: Option<f64>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBillServiceDto {
    #[serde(rename = "billID", default, deserialize_with = "non_null")]
    pub bill_id: Option<i32>,
    #[serde(rename = "serviceID", default, deserialize_with = "non_null")]
    pub service_id: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub quantity: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>)]
    pub total_service_price: Option<Option<f64>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BillServiceCreatedDto {
    pub message: String,
    #[serde(rename = "billServiceID")]
    pub bill_service_id: i32,
    pub data: BillServiceDto,
}
