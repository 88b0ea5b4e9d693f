use sea_orm::DatabaseConnection;

use crate::server::{
    data::bill_service::BillServiceRepository,
    error::AppError,
    model::{
        bill_service::{BillServiceRecord, CreateBillServiceParams, UpdateBillServiceParams},
        UpdateOutcome,
    },
};

pub struct BillServiceRecordService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillServiceRecordService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBillServiceParams) -> Result<BillServiceRecord, AppError> {
        let repo = BillServiceRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<BillServiceRecord>, AppError> {
        let repo = BillServiceRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, bill_service_id: i32) -> Result<Option<BillServiceRecord>, AppError> {
        let repo = BillServiceRepository::new(self.db);

        Ok(repo.get_by_id(bill_service_id).await?)
    }

    /// Updates the supplied columns
    /// Returns `NotFound` for an unknown ID before looking at which columns were supplied
    pub async fn update(&self, params: UpdateBillServiceParams) -> Result<UpdateOutcome, AppError> {
        let repo = BillServiceRepository::new(self.db);

        if !repo.exists(params.bill_service_id).await? {
            return Ok(UpdateOutcome::NotFound);
        }

        if params.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        repo.update(params).await?;

        Ok(UpdateOutcome::Updated)
    }

    /// Returns false if no row has the given ID
    pub async fn delete(&self, bill_service_id: i32) -> Result<bool, AppError> {
        let repo = BillServiceRepository::new(self.db);

        if !repo.exists(bill_service_id).await? {
            return Ok(false);
        }

        repo.delete(bill_service_id).await?;

        Ok(true)
    }
}
