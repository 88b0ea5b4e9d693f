//! Room type factory for creating test room type entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test room types with customizable fields.
pub struct RoomTypeFactory<'a> {
    db: &'a DatabaseConnection,
    type_name: String,
    base_price: f64,
    capacity: i32,
}

impl<'a> RoomTypeFactory<'a> {
    /// Creates a new RoomTypeFactory with default values.
    ///
    /// Defaults:
    /// - type_name: `"Suite {id}"` where id is auto-incremented
    /// - base_price: `350.0`
    /// - capacity: `4`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            type_name: format!("Suite {}", next_id()),
            base_price: 350.0,
            capacity: 4,
        }
    }

    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn base_price(mut self, base_price: f64) -> Self {
        self.base_price = base_price;
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds and inserts the room type entity into the database.
    pub async fn build(self) -> Result<entity::room_type::Model, DbErr> {
        entity::room_type::ActiveModel {
            type_name: ActiveValue::Set(self.type_name),
            description: ActiveValue::Set("Luxury suite".to_string()),
            base_price: ActiveValue::Set(self.base_price),
            capacity: ActiveValue::Set(self.capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room type priced at 350.0 for up to 4 guests.
pub async fn create_room_type(db: &DatabaseConnection) -> Result<entity::room_type::Model, DbErr> {
    RoomTypeFactory::new(db).build().await
}
