use sea_orm::DatabaseConnection;

use crate::server::{
    data::payment::PaymentRepository,
    error::AppError,
    model::{
        payment::{CreatePaymentParams, Payment, UpdatePaymentParams},
        UpdateOutcome,
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, AppError> {
        let repo = PaymentRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Payment>, AppError> {
        let repo = PaymentRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, payment_id: i32) -> Result<Option<Payment>, AppError> {
        let repo = PaymentRepository::new(self.db);

        Ok(repo.get_by_id(payment_id).await?)
    }

    /// Updates the supplied columns
    /// Returns `NotFound` for an unknown ID before looking at which columns were supplied
    pub async fn update(&self, params: UpdatePaymentParams) -> Result<UpdateOutcome, AppError> {
        let repo = PaymentRepository::new(self.db);

        if !repo.exists(params.payment_id).await? {
            return Ok(UpdateOutcome::NotFound);
        }

        if params.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        repo.update(params).await?;

        Ok(UpdateOutcome::Updated)
    }

    /// Returns false if no row has the given ID
    pub async fn delete(&self, payment_id: i32) -> Result<bool, AppError> {
        let repo = PaymentRepository::new(self.db);

        if !repo.exists(payment_id).await? {
            return Ok(false);
        }

        repo.delete(payment_id).await?;

        Ok(true)
    }
}
