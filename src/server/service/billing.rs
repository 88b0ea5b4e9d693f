use sea_orm::DatabaseConnection;

use crate::server::{
    data::billing::BillRepository,
    error::AppError,
    model::{
        billing::{Bill, CreateBillParams, UpdateBillParams},
        UpdateOutcome,
    },
};

pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBillParams) -> Result<Bill, AppError> {
        let repo = BillRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Bill>, AppError> {
        let repo = BillRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, bill_id: i32) -> Result<Option<Bill>, AppError> {
        let repo = BillRepository::new(self.db);

        Ok(repo.get_by_id(bill_id).await?)
    }

    /// Updates the supplied columns
    /// Returns `NotFound` for an unknown ID before looking at which columns were supplied
    pub async fn update(&self, params: UpdateBillParams) -> Result<UpdateOutcome, AppError> {
        let repo = BillRepository::new(self.db);

        if !repo.exists(params.bill_id).await? {
            return Ok(UpdateOutcome::NotFound);
        }

        if params.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        repo.update(params).await?;

        Ok(UpdateOutcome::Updated)
    }

    /// Deletes a bill together with its payments and service charges
    /// Returns false if no bill has the given ID
    pub async fn delete(&self, bill_id: i32) -> Result<bool, AppError> {
        let repo = BillRepository::new(self.db);

        if !repo.exists(bill_id).await? {
            return Ok(false);
        }

        repo.delete(bill_id).await?;

        Ok(true)
    }
}
