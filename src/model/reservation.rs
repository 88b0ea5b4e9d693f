use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::field::{non_null, non_null_room_number, nullable, room_number};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    #[serde(rename = "reservationID")]
    pub reservation_id: i32,
    #[serde(rename = "guestID")]
    pub guest_id: i32,
    pub room_number: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub booking_date: Option<NaiveDate>,
    pub number_of_adults: Option<i32>,
    pub number_of_children: Option<i32>,
    pub reservation_status: Option<String>,
    pub price_per_night: Option<f64>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationDto {
    #[serde(rename = "guestID")]
    pub guest_id: Option<i32>,
    #[serde(default, deserialize_with = "room_number")]
    #[schema(value_type = Option<String>)]
    pub room_number: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub booking_date: Option<NaiveDate>,
    pub number_of_adults: Option<i32>,
    pub number_of_children: Option<i32>,
    pub reservation_status: Option<String>,
    pub price_per_night: Option<f64>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateReservationDto {
    #[serde(rename = "guestID", default, deserialize_with = "non_null")]
    pub guest_id: Option<i32>,
    #[serde(default, deserialize_with = "non_null_room_number")]
    #[schema(value_type = Option<String>)]
    pub room_number: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "non_null")]
    pub check_out_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<NaiveDate>)]
    pub booking_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub number_of_adults: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub number_of_children: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub reservation_status: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>)]
    pub price_per_night: Option<Option<f64>>,
}

/// Body of the status transition endpoint; a missing status means check-out.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct UpdateReservationStatusDto {
    pub new_status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationCreatedDto {
    pub message: String,
    #[serde(rename = "reservationID")]
    pub reservation_id: i32,
    pub data: ReservationDto,
}
