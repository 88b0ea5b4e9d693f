use sea_orm::DatabaseConnection;

use crate::server::{
    data::room_type::RoomTypeRepository,
    error::AppError,
    model::{
        room_type::{CreateRoomTypeParams, RoomType, UpdateRoomTypeParams},
        UpdateOutcome,
    },
};

pub struct RoomTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRoomTypeParams) -> Result<RoomType, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<RoomType>, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, room_type_id: i32) -> Result<Option<RoomType>, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        Ok(repo.get_by_id(room_type_id).await?)
    }

    /// Updates the supplied columns
    /// Returns `NotFound` for an unknown ID before looking at which columns were supplied
    pub async fn update(&self, params: UpdateRoomTypeParams) -> Result<UpdateOutcome, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        if !repo.exists(params.room_type_id).await? {
            return Ok(UpdateOutcome::NotFound);
        }

        if params.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        repo.update(params).await?;

        Ok(UpdateOutcome::Updated)
    }

    /// Returns false if no row has the given ID
    pub async fn delete(&self, room_type_id: i32) -> Result<bool, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        if !repo.exists(room_type_id).await? {
            return Ok(false);
        }

        repo.delete(room_type_id).await?;

        Ok(true)
    }
}
