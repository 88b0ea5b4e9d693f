use sea_orm::DatabaseConnection;

use crate::server::{
    data::room::RoomRepository,
    error::AppError,
    model::{
        room::{CreateRoomParams, Room, RoomDetails, UpdateRoomParams},
        UpdateOutcome,
    },
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        let repo = RoomRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Room>, AppError> {
        let repo = RoomRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets every room with its room type name and base price
    pub async fn get_all_with_details(&self) -> Result<Vec<RoomDetails>, AppError> {
        let repo = RoomRepository::new(self.db);

        Ok(repo.get_all_with_details().await?)
    }

    /// Gets rooms of a type that are currently marked available
    pub async fn get_available(&self, room_type_id: i32) -> Result<Vec<Room>, AppError> {
        let repo = RoomRepository::new(self.db);

        Ok(repo.get_available(room_type_id).await?)
    }

    pub async fn get_by_id(&self, room_number: &str) -> Result<Option<Room>, AppError> {
        let repo = RoomRepository::new(self.db);

        Ok(repo.get_by_id(room_number).await?)
    }

    /// Updates the supplied columns; the room number itself never changes
    pub async fn update(&self, params: UpdateRoomParams) -> Result<UpdateOutcome, AppError> {
        let repo = RoomRepository::new(self.db);

        if !repo.exists(&params.room_number).await? {
            return Ok(UpdateOutcome::NotFound);
        }

        if params.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        repo.update(params).await?;

        Ok(UpdateOutcome::Updated)
    }

    pub async fn delete(&self, room_number: &str) -> Result<bool, AppError> {
        let repo = RoomRepository::new(self.db);

        if !repo.exists(room_number).await? {
            return Ok(false);
        }

        repo.delete(room_number).await?;

        Ok(true)
    }
}
