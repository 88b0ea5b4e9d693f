use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::reservation::{
    CreateReservationParams, Reservation, UpdateReservationParams,
};

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            guest_id: ActiveValue::Set(params.guest_id),
            room_number: ActiveValue::Set(params.room_number),
            check_in_date: ActiveValue::Set(params.check_in_date),
            check_out_date: ActiveValue::Set(params.check_out_date),
            booking_date: ActiveValue::Set(params.booking_date),
            number_of_adults: ActiveValue::Set(params.number_of_adults),
            number_of_children: ActiveValue::Set(params.number_of_children),
            reservation_status: ActiveValue::Set(params.reservation_status),
            price_per_night: ActiveValue::Set(params.price_per_night),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(reservation))
    }

    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::ReservationId)
            .all(self.db)
            .await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    pub async fn get_by_id(&self, reservation_id: i32) -> Result<Option<Reservation>, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(reservation_id)
            .one(self.db)
            .await?;

        Ok(reservation.map(Reservation::from_entity))
    }

    pub async fn exists(&self, reservation_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find_by_id(reservation_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update(&self, params: UpdateReservationParams) -> Result<Reservation, DbErr> {
        let reservation = self.find_model(params.reservation_id).await?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        if let Some(guest_id) = params.guest_id {
            active_model.guest_id = ActiveValue::Set(guest_id);
        }
        if let Some(room_number) = params.room_number {
            active_model.room_number = ActiveValue::Set(room_number);
        }
        if let Some(check_in_date) = params.check_in_date {
            active_model.check_in_date = ActiveValue::Set(check_in_date);
        }
        if let Some(check_out_date) = params.check_out_date {
            active_model.check_out_date = ActiveValue::Set(check_out_date);
        }
        if let Some(booking_date) = params.booking_date {
            active_model.booking_date = ActiveValue::Set(booking_date);
        }
        if let Some(number_of_adults) = params.number_of_adults {
            active_model.number_of_adults = ActiveValue::Set(number_of_adults);
        }
        if let Some(number_of_children) = params.number_of_children {
            active_model.number_of_children = ActiveValue::Set(number_of_children);
        }
        if let Some(reservation_status) = params.reservation_status {
            active_model.reservation_status = ActiveValue::Set(reservation_status);
        }
        if let Some(price_per_night) = params.price_per_night {
            active_model.price_per_night = ActiveValue::Set(price_per_night);
        }

        let reservation = active_model.update(self.db).await?;

        Ok(Reservation::from_entity(reservation))
    }

    /// Sets only the reservation status column
    pub async fn update_status(
        &self,
        reservation_id: i32,
        status: String,
    ) -> Result<Reservation, DbErr> {
        let reservation = self.find_model(reservation_id).await?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.reservation_status = ActiveValue::Set(Some(status));

        let reservation = active_model.update(self.db).await?;

        Ok(Reservation::from_entity(reservation))
    }

    pub async fn delete(&self, reservation_id: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::delete_by_id(reservation_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn find_model(&self, reservation_id: i32) -> Result<entity::reservation::Model, DbErr> {
        entity::prelude::Reservation::find_by_id(reservation_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation with id {} not found",
                reservation_id
            )))
    }
}
