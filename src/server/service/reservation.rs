use sea_orm::DatabaseConnection;

use crate::server::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::{
        reservation::{
            CreateReservationParams, Reservation, UpdateReservationParams,
            DEFAULT_STATUS_TRANSITION,
        },
        UpdateOutcome,
    },
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation without checking dates or room availability
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, reservation_id: i32) -> Result<Option<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.get_by_id(reservation_id).await?)
    }

    pub async fn update(
        &self,
        params: UpdateReservationParams,
    ) -> Result<UpdateOutcome, AppError> {
        let repo = ReservationRepository::new(self.db);

        if !repo.exists(params.reservation_id).await? {
            return Ok(UpdateOutcome::NotFound);
        }

        if params.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        repo.update(params).await?;

        Ok(UpdateOutcome::Updated)
    }

    /// Moves a reservation to a new status, defaulting to check-out
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Status written
    /// - `Ok(None)` - No reservation with that ID
    pub async fn update_status(
        &self,
        reservation_id: i32,
        new_status: Option<String>,
    ) -> Result<Option<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        if !repo.exists(reservation_id).await? {
            return Ok(None);
        }

        let status = new_status
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATUS_TRANSITION.to_string());

        let reservation = repo.update_status(reservation_id, status).await?;

        tracing::info!(
            "Reservation {} moved to status {:?}",
            reservation_id,
            reservation.reservation_status
        );

        Ok(Some(reservation))
    }

    /// Deletes a reservation and any bills issued against it
    pub async fn delete(&self, reservation_id: i32) -> Result<bool, AppError> {
        let repo = ReservationRepository::new(self.db);

        if !repo.exists(reservation_id).await? {
            return Ok(false);
        }

        repo.delete(reservation_id).await?;

        Ok(true)
    }
}
