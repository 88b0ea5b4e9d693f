use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::{non_null, nullable};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestDto {
    #[serde(rename = "guestID")]
    pub guest_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub id_proof: String,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub id_proof: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateGuestDto {
    #[serde(default, deserialize_with = "non_null")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub phone_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub id_proof: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GuestCreatedDto {
    pub message: String,
    #[serde(rename = "guestID")]
    pub guest_id: i32,
    pub data: GuestDto,
}
