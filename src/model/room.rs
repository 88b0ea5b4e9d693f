use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::field::{non_null, room_number};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub room_number: String,
    #[serde(rename = "roomTypeID")]
    pub room_type_id: i32,
    pub floor_number: i32,
    pub current_status: String,
}

/// Room joined with the name and price of its room type.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailsDto {
    pub room_number: String,
    #[serde(rename = "roomTypeID")]
    pub room_type_id: i32,
    pub floor_number: i32,
    pub current_status: String,
    pub room_type: String,
    pub base_price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailableRoomDto {
    pub room_number: String,
}

/// Query string of the available-rooms lookup.
///
/// `roomTypeId` is kept as raw text so a missing value and a non-numeric value can be
/// reported separately.
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailableRoomsQuery {
    /// Room type to list available rooms for
    #[serde(rename = "roomTypeId")]
    #[param(value_type = Option<i32>)]
    pub room_type_id: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomDto {
    #[serde(default, deserialize_with = "room_number")]
    #[schema(value_type = Option<String>)]
    pub room_number: Option<String>,
    #[serde(rename = "roomTypeID")]
    pub room_type_id: Option<i32>,
    pub floor_number: Option<i32>,
    pub current_status: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateRoomDto {
    #[serde(rename = "roomTypeID", default, deserialize_with = "non_null")]
    pub room_type_id: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub floor_number: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub current_status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreatedDto {
    pub message: String,
    pub room_number: String,
    pub data: RoomDto,
}
