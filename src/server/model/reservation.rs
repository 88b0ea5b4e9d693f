//! Reservation domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto, UpdateReservationDto},
    server::{
        error::AppError,
        util::validate::{optional_text, RequiredFields},
    },
};

/// Status applied by the status endpoint when the request names none.
pub const DEFAULT_STATUS_TRANSITION: &str = "Checked-out";

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub reservation_id: i32,
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

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            reservation_id: entity.reservation_id,
            guest_id: entity.guest_id,
            room_number: entity.room_number,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            booking_date: entity.booking_date,
            number_of_adults: entity.number_of_adults,
            number_of_children: entity.number_of_children,
            reservation_status: entity.reservation_status,
            price_per_night: entity.price_per_night,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            reservation_id: self.reservation_id,
            guest_id: self.guest_id,
            room_number: self.room_number,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            booking_date: self.booking_date,
            number_of_adults: self.number_of_adults,
            number_of_children: self.number_of_children,
            reservation_status: self.reservation_status,
            price_per_night: self.price_per_night,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReservationParams {
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

impl CreateReservationParams {
    /// Checks that guestID, roomNumber, checkInDate and checkOutDate are present.
    ///
    /// Date ordering and room availability are not checked.
    pub fn from_dto(dto: CreateReservationDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let guest_id = required.value("guestID", dto.guest_id);
        let room_number = required.text("roomNumber", dto.room_number);
        let check_in_date = required.value("checkInDate", dto.check_in_date);
        let check_out_date = required.value("checkOutDate", dto.check_out_date);
        required.finish()?;

        Ok(Self {
            guest_id,
            room_number,
            check_in_date,
            check_out_date,
            booking_date: dto.booking_date,
            number_of_adults: dto.number_of_adults,
            number_of_children: dto.number_of_children,
            reservation_status: optional_text(dto.reservation_status),
            price_per_night: dto.price_per_night,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReservationParams {
    pub reservation_id: i32,
    pub guest_id: Option<i32>,
    pub room_number: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub booking_date: Option<Option<NaiveDate>>,
    pub number_of_adults: Option<Option<i32>>,
    pub number_of_children: Option<Option<i32>>,
    pub reservation_status: Option<Option<String>>,
    pub price_per_night: Option<Option<f64>>,
}

impl UpdateReservationParams {
    pub fn from_dto(reservation_id: i32, dto: UpdateReservationDto) -> Self {
        Self {
            reservation_id,
            guest_id: dto.guest_id,
            room_number: dto.room_number,
            check_in_date: dto.check_in_date,
            check_out_date: dto.check_out_date,
            booking_date: dto.booking_date,
            number_of_adults: dto.number_of_adults,
            number_of_children: dto.number_of_children,
            reservation_status: dto.reservation_status,
            price_per_night: dto.price_per_night,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.guest_id.is_none()
            && self.room_number.is_none()
            && self.check_in_date.is_none()
            && self.check_out_date.is_none()
            && self.booking_date.is_none()
            && self.number_of_adults.is_none()
            && self.number_of_children.is_none()
            && self.reservation_status.is_none()
            && self.price_per_night.is_none()
    }
}
