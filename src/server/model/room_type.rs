//! Room type domain models and parameters.

use crate::{
    model::room_type::{CreateRoomTypeDto, RoomTypeDto, UpdateRoomTypeDto},
    server::{error::AppError, util::validate::RequiredFields},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RoomType {
    pub room_type_id: i32,
    pub type_name: String,
    pub description: String,
    pub base_price: f64,
    pub capacity: i32,
}

impl RoomType {
    pub fn from_entity(entity: entity::room_type::Model) -> Self {
        Self {
            room_type_id: entity.room_type_id,
            type_name: entity.type_name,
            description: entity.description,
            base_price: entity.base_price,
            capacity: entity.capacity,
        }
    }

    pub fn into_dto(self) -> RoomTypeDto {
        RoomTypeDto {
            room_type_id: self.room_type_id,
            type_name: self.type_name,
            description: self.description,
            base_price: self.base_price,
            capacity: self.capacity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomTypeParams {
    pub type_name: String,
    pub description: String,
    pub base_price: f64,
    pub capacity: i32,
}

impl CreateRoomTypeParams {
    pub fn from_dto(dto: CreateRoomTypeDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let type_name = required.text("typeName", dto.type_name);
        let description = required.text("description", dto.description);
        let base_price = required.value("basePrice", dto.base_price);
        let capacity = required.value("capacity", dto.capacity);
        required.finish()?;

        Ok(Self {
            type_name,
            description,
            base_price,
            capacity,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoomTypeParams {
    pub room_type_id: i32,
    pub type_name: Option<String>,
    pub description: Option<String>,
    pub base_price: Option<f64>,
    pub capacity: Option<i32>,
}

impl UpdateRoomTypeParams {
    pub fn from_dto(room_type_id: i32, dto: UpdateRoomTypeDto) -> Self {
        Self {
            room_type_id,
            type_name: dto.type_name,
            description: dto.description,
            base_price: dto.base_price,
            capacity: dto.capacity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.type_name.is_none()
            && self.description.is_none()
            && self.base_price.is_none()
            && self.capacity.is_none()
    }
}
