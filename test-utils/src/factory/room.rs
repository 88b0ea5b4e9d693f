//! Room factory for creating test room entities.
//!
//! Rooms carry a business-assigned primary key, so the factory generates a unique
//! room number unless one is supplied.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_number: String,
    room_type_id: i32,
    floor_number: i32,
    status: String,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory for the given room type.
    ///
    /// Defaults:
    /// - room_number: `"R{id}"` where id is auto-incremented
    /// - floor_number: `1`
    /// - status: `"Available"`
    pub fn new(db: &'a DatabaseConnection, room_type_id: i32) -> Self {
        Self {
            db,
            room_number: format!("R{}", next_id()),
            room_type_id,
            floor_number: 1,
            status: "Available".to_string(),
        }
    }

    /// Sets the room number.
    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    /// Sets the floor number.
    pub fn floor_number(mut self, floor_number: i32) -> Self {
        self.floor_number = floor_number;
        self
    }

    /// Sets the current status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(self.room_number),
            room_type_id: ActiveValue::Set(self.room_type_id),
            floor_number: ActiveValue::Set(self.floor_number),
            current_status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available room of the given type.
///
/// Shorthand for `RoomFactory::new(db, room_type_id).build().await`.
pub async fn create_room(
    db: &DatabaseConnection,
    room_type_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, room_type_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::room_type::create_room_type};

    #[tokio::test]
    async fn creates_room_with_custom_status() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_room_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let room_type = create_room_type(db).await?;
        let room = RoomFactory::new(db, room_type.room_type_id)
            .room_number("305")
            .status("Occupied")
            .build()
            .await?;

        assert_eq!(room.room_number, "305");
        assert_eq!(room.current_status, "Occupied");
        assert_eq!(room.room_type_id, room_type.room_type_id);

        Ok(())
    }
}
