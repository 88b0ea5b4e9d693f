use sea_orm::DatabaseConnection;

use crate::server::{
    data::service::ServiceRepository,
    error::AppError,
    model::{
        service::{CreateServiceParams, Service, UpdateServiceParams},
        UpdateOutcome,
    },
};

pub struct ServiceCatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceCatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateServiceParams) -> Result<Service, AppError> {
        let repo = ServiceRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Service>, AppError> {
        let repo = ServiceRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, service_id: i32) -> Result<Option<Service>, AppError> {
        let repo = ServiceRepository::new(self.db);

        Ok(repo.get_by_id(service_id).await?)
    }

    /// Updates the supplied columns
    /// Returns `NotFound` for an unknown ID before looking at which columns were supplied
    pub async fn update(&self, params: UpdateServiceParams) -> Result<UpdateOutcome, AppError> {
        let repo = ServiceRepository::new(self.db);

        if !repo.exists(params.service_id).await? {
            return Ok(UpdateOutcome::NotFound);
        }

        if params.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        repo.update(params).await?;

        Ok(UpdateOutcome::Updated)
    }

    /// Returns false if no row has the given ID
    pub async fn delete(&self, service_id: i32) -> Result<bool, AppError> {
        let repo = ServiceRepository::new(self.db);

        if !repo.exists(service_id).await? {
            return Ok(false);
        }

        repo.delete(service_id).await?;

        Ok(true)
    }
}
