use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::service::{CreateServiceParams, Service, UpdateServiceParams};

pub struct ServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateServiceParams) -> Result<Service, DbErr> {
        let service = entity::service::ActiveModel {
            service_name: ActiveValue::Set(params.service_name),
            description: ActiveValue::Set(params.description),
            unit_price: ActiveValue::Set(params.unit_price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Service::from_entity(service))
    }

    pub async fn get_all(&self) -> Result<Vec<Service>, DbErr> {
        let services = entity::prelude::Service::find()
            .order_by_asc(entity::service::Column::ServiceId)
            .all(self.db)
            .await?;

        Ok(services.into_iter().map(Service::from_entity).collect())
    }

    pub async fn get_by_id(&self, service_id: i32) -> Result<Option<Service>, DbErr> {
        let service = entity::prelude::Service::find_by_id(service_id)
            .one(self.db)
            .await?;

        Ok(service.map(Service::from_entity))
    }

    pub async fn exists(&self, service_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Service::find_by_id(service_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update(&self, params: UpdateServiceParams) -> Result<Service, DbErr> {
        let service = entity::prelude::Service::find_by_id(params.service_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Service with id {} not found",
                params.service_id
            )))?;

        let mut active_model: entity::service::ActiveModel = service.into();
        if let Some(service_name) = params.service_name {
            active_model.service_name = ActiveValue::Set(service_name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(unit_price) = params.unit_price {
            active_model.unit_price = ActiveValue::Set(unit_price);
        }

        let service = active_model.update(self.db).await?;

        Ok(Service::from_entity(service))
    }

    pub async fn delete(&self, service_id: i32) -> Result<(), DbErr> {
        entity::prelude::Service::delete_by_id(service_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
