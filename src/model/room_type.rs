use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::non_null;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeDto {
    #[serde(rename = "roomTypeID")]
    pub room_type_id: i32,
    pub type_name: String,
    pub description: String,
    pub base_price: f64,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomTypeDto {
    pub type_name: Option<String>,
    pub description: Option<String>,
    pub base_price: Option<f64>,
    pub capacity: Option<i32>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateRoomTypeDto {
    #[serde(default, deserialize_with = "non_null")]
    pub type_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub base_price: Option<f64>,
    #[serde(default, deserialize_with = "non_null")]
    pub capacity: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomTypeCreatedDto {
    pub message: String,
    #[serde(rename = "roomTypeID")]
    pub room_type_id: i32,
    pub data: RoomTypeDto,
}
