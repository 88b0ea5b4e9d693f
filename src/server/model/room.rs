//! Room domain models and parameters.
//!
//! Rooms are keyed by their business-assigned room number rather than a generated id.
//! [`RoomDetails`] is the read-only join of a room with its room type.

use crate::{
    model::room::{AvailableRoomDto, CreateRoomDto, RoomDetailsDto, RoomDto, UpdateRoomDto},
    server::{error::AppError, util::validate::RequiredFields},
};

/// Status value that marks a room as bookable.
pub const AVAILABLE_STATUS: &str = "Available";

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub room_number: String,
    pub room_type_id: i32,
    pub floor_number: i32,
    pub current_status: String,
}

impl Room {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            room_number: entity.room_number,
            room_type_id: entity.room_type_id,
            floor_number: entity.floor_number,
            current_status: entity.current_status,
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            room_number: self.room_number,
            room_type_id: self.room_type_id,
            floor_number: self.floor_number,
            current_status: self.current_status,
        }
    }

    /// Converts to the reduced DTO returned by the available-rooms lookup.
    pub fn into_available_dto(self) -> AvailableRoomDto {
        AvailableRoomDto {
            room_number: self.room_number,
        }
    }
}

/// Room together with the name and base price of its room type.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDetails {
    pub room_number: String,
    pub room_type_id: i32,
    pub floor_number: i32,
    pub current_status: String,
    pub room_type: String,
    pub base_price: f64,
}

impl RoomDetails {
    /// Builds the joined view from a room and its room type.
    ///
    /// # Returns
    /// - `Some(RoomDetails)` - Room type was present
    /// - `None` - Join produced no room type; the room is left out of the listing
    pub fn from_entity(
        room: entity::room::Model,
        room_type: Option<entity::room_type::Model>,
    ) -> Option<Self> {
        let room_type = room_type?;

        Some(Self {
            room_number: room.room_number,
            room_type_id: room.room_type_id,
            floor_number: room.floor_number,
            current_status: room.current_status,
            room_type: room_type.type_name,
            base_price: room_type.base_price,
        })
    }

    pub fn into_dto(self) -> RoomDetailsDto {
        RoomDetailsDto {
            room_number: self.room_number,
            room_type_id: self.room_type_id,
            floor_number: self.floor_number,
            current_status: self.current_status,
            room_type: self.room_type,
            base_price: self.base_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub room_number: String,
    pub room_type_id: i32,
    pub floor_number: i32,
    pub current_status: String,
}

impl CreateRoomParams {
    pub fn from_dto(dto: CreateRoomDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let room_number = required.text("roomNumber", dto.room_number);
        let room_type_id = required.value("roomTypeID", dto.room_type_id);
        let floor_number = required.value("floorNumber", dto.floor_number);
        let current_status = required.text("currentStatus", dto.current_status);
        required.finish()?;

        Ok(Self {
            room_number,
            room_type_id,
            floor_number,
            current_status,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParams {
    pub room_number: String,
    pub room_type_id: Option<i32>,
    pub floor_number: Option<i32>,
    pub current_status: Option<String>,
}

impl UpdateRoomParams {
    pub fn from_dto(room_number: String, dto: UpdateRoomDto) -> Self {
        Self {
            room_number,
            room_type_id: dto.room_type_id,
            floor_number: dto.floor_number,
            current_status: dto.current_status,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.room_type_id.is_none() && self.floor_number.is_none() && self.current_status.is_none()
    }
}
