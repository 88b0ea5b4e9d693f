use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::{non_null, nullable};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    #[serde(rename = "serviceID")]
    pub service_id: i32,
    pub service_name: String,
    pub description: Option<String>,
    pub unit_price: f64,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceDto {
    pub service_name: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<f64>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateServiceDto {
    #[serde(default, deserialize_with = "non_null")]
    pub service_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub unit_price: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServiceCreatedDto {
    pub message: String,
    #[serde(rename = "serviceID")]
    pub service_id: i32,
    pub data: ServiceDto,
}
