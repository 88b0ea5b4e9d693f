use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::{non_null, nullable};

/// Staff member as exposed over the API; the password hash is never part of it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffDto {
    #[serde(rename = "staffID")]
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub username: String,
    pub role: String,
    pub address: Option<String>,
    pub date_of_hire: Option<NaiveDate>,
    pub salary: Option<f64>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub address: Option<String>,
    pub date_of_hire: Option<NaiveDate>,
    pub salary: Option<f64>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateStaffDto {
    #[serde(default, deserialize_with = "non_null")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub phone_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub username: Option<String>,
    /// Replaces the stored hash with a hash of this password.
    #[serde(default, deserialize_with = "non_null")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<NaiveDate>)]
    pub date_of_hire: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>)]
    pub salary: Option<Option<f64>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StaffCreatedDto {
    pub message: String,
    #[serde(rename = "staffID")]
    pub staff_id: i32,
    pub data: StaffDto,
}
