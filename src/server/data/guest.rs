use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::guest::{CreateGuestParams, Guest, UpdateGuestParams};

pub struct GuestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a guest and returns the stored row
    pub async fn create(&self, params: CreateGuestParams) -> Result<Guest, DbErr> {
        let guest = entity::guest::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone_number: ActiveValue::Set(params.phone_number),
            address: ActiveValue::Set(params.address),
            id_proof: ActiveValue::Set(params.id_proof),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Guest::from_entity(guest))
    }

    /// Gets every guest ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Guest>, DbErr> {
        let guests = entity::prelude::Guest::find()
            .order_by_asc(entity::guest::Column::GuestId)
            .all(self.db)
            .await?;

        Ok(guests.into_iter().map(Guest::from_entity).collect())
    }

    pub async fn get_by_id(&self, guest_id: i32) -> Result<Option<Guest>, DbErr> {
        let guest = entity::prelude::Guest::find_by_id(guest_id)
            .one(self.db)
            .await?;

        Ok(guest.map(Guest::from_entity))
    }

    pub async fn exists(&self, guest_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Guest::find_by_id(guest_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Writes the supplied columns, leaving the rest untouched
    pub async fn update(&self, params: UpdateGuestParams) -> Result<Guest, DbErr> {
        let guest = entity::prelude::Guest::find_by_id(params.guest_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Guest with id {} not found",
                params.guest_id
            )))?;

        let mut active_model: entity::guest::ActiveModel = guest.into();
        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone_number) = params.phone_number {
            active_model.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }
        if let Some(id_proof) = params.id_proof {
            active_model.id_proof = ActiveValue::Set(id_proof);
        }

        let guest = active_model.update(self.db).await?;

        Ok(Guest::from_entity(guest))
    }

    pub async fn delete(&self, guest_id: i32) -> Result<(), DbErr> {
        entity::prelude::Guest::delete_by_id(guest_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
