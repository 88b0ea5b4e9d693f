use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::room::{
    CreateRoomParams, Room, RoomDetails, UpdateRoomParams, AVAILABLE_STATUS,
};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a room under its business-assigned room number
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let room = entity::room::ActiveModel {
            room_number: ActiveValue::Set(params.room_number),
            room_type_id: ActiveValue::Set(params.room_type_id),
            floor_number: ActiveValue::Set(params.floor_number),
            current_status: ActiveValue::Set(params.current_status),
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(room))
    }

    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        let rooms = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await?;

        Ok(rooms.into_iter().map(Room::from_entity).collect())
    }

    /// Gets every room joined with its room type
    pub async fn get_all_with_details(&self) -> Result<Vec<RoomDetails>, DbErr> {
        let rooms = entity::prelude::Room::find()
            .find_also_related(entity::prelude::RoomType)
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await?;

        Ok(rooms
            .into_iter()
            .filter_map(|(room, room_type)| RoomDetails::from_entity(room, room_type))
            .collect())
    }

    /// Gets rooms of the given type whose status is the available sentinel
    pub async fn get_available(&self, room_type_id: i32) -> Result<Vec<Room>, DbErr> {
        let rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomTypeId.eq(room_type_id))
            .filter(entity::room::Column::CurrentStatus.eq(AVAILABLE_STATUS))
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await?;

        Ok(rooms.into_iter().map(Room::from_entity).collect())
    }

    pub async fn get_by_id(&self, room_number: &str) -> Result<Option<Room>, DbErr> {
        let room = entity::prelude::Room::find_by_id(room_number.to_string())
            .one(self.db)
            .await?;

        Ok(room.map(Room::from_entity))
    }

    pub async fn exists(&self, room_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Room::find_by_id(room_number.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update(&self, params: UpdateRoomParams) -> Result<Room, DbErr> {
        let room = entity::prelude::Room::find_by_id(params.room_number.clone())
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Room {} not found",
                params.room_number
            )))?;

        let mut active_model: entity::room::ActiveModel = room.into();
        if let Some(room_type_id) = params.room_type_id {
            active_model.room_type_id = ActiveValue::Set(room_type_id);
        }
        if let Some(floor_number) = params.floor_number {
            active_model.floor_number = ActiveValue::Set(floor_number);
        }
        if let Some(current_status) = params.current_status {
            active_model.current_status = ActiveValue::Set(current_status);
        }

        let room = active_model.update(self.db).await?;

        Ok(Room::from_entity(room))
    }

    pub async fn delete(&self, room_number: &str) -> Result<(), DbErr> {
        entity::prelude::Room::delete_by_id(room_number.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
