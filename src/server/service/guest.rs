use sea_orm::DatabaseConnection;

use crate::server::{
    data::guest::GuestRepository,
    error::AppError,
    model::{
        guest::{CreateGuestParams, Guest, UpdateGuestParams},
        UpdateOutcome,
    },
};

pub struct GuestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGuestParams) -> Result<Guest, AppError> {
        let repo = GuestRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Guest>, AppError> {
        let repo = GuestRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, guest_id: i32) -> Result<Option<Guest>, AppError> {
        let repo = GuestRepository::new(self.db);

        Ok(repo.get_by_id(guest_id).await?)
    }

    /// Updates the supplied columns of a guest
    ///
    /// Existence is checked before the empty-body check, so an unknown ID reports
    /// `NotFound` even when nothing was supplied.
    pub async fn update(&self, params: UpdateGuestParams) -> Result<UpdateOutcome, AppError> {
        let repo = GuestRepository::new(self.db);

        if !repo.exists(params.guest_id).await? {
            return Ok(UpdateOutcome::NotFound);
        }

        if params.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        repo.update(params).await?;

        Ok(UpdateOutcome::Updated)
    }

    /// Returns false if no row has the given ID
    pub async fn delete(&self, guest_id: i32) -> Result<bool, AppError> {
        let repo = GuestRepository::new(self.db);

        if !repo.exists(guest_id).await? {
            return Ok(false);
        }

        repo.delete(guest_id).await?;

        Ok(true)
    }
}
