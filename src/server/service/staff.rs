use sea_orm::DatabaseConnection;

use crate::server::{
    data::staff::StaffRepository,
    error::AppError,
    model::{
        staff::{CreateStaffParams, Staff, UpdateStaffParams},
        UpdateOutcome,
    },
};

pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a staff member; the password in `params` is already hashed
    pub async fn create(&self, params: CreateStaffParams) -> Result<Staff, AppError> {
        let repo = StaffRepository::new(self.db);

        let staff = repo.create(params).await?;

        tracing::info!("Created staff member {} ({})", staff.username, staff.role);

        Ok(staff)
    }

    pub async fn get_all(&self) -> Result<Vec<Staff>, AppError> {
        let repo = StaffRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, staff_id: i32) -> Result<Option<Staff>, AppError> {
        let repo = StaffRepository::new(self.db);

        Ok(repo.get_by_id(staff_id).await?)
    }

    /// Updates the supplied columns
    /// Returns `NotFound` for an unknown ID before looking at which columns were supplied
    pub async fn update(&self, params: UpdateStaffParams) -> Result<UpdateOutcome, AppError> {
        let repo = StaffRepository::new(self.db);

        if !repo.exists(params.staff_id).await? {
            return Ok(UpdateOutcome::NotFound);
        }

        if params.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        repo.update(params).await?;

        Ok(UpdateOutcome::Updated)
    }

    /// Returns false if no row has the given ID
    pub async fn delete(&self, staff_id: i32) -> Result<bool, AppError> {
        let repo = StaffRepository::new(self.db);

        if !repo.exists(staff_id).await? {
            return Ok(false);
        }

        repo.delete(staff_id).await?;

        Ok(true)
    }
}
