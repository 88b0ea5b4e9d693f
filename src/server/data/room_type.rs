use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::room_type::{CreateRoomTypeParams, RoomType, UpdateRoomTypeParams};

pub struct RoomTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRoomTypeParams) -> Result<RoomType, DbErr> {
        let room_type = entity::room_type::ActiveModel {
            type_name: ActiveValue::Set(params.type_name),
            description: ActiveValue::Set(params.description),
            base_price: ActiveValue::Set(params.base_price),
            capacity: ActiveValue::Set(params.capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoomType::from_entity(room_type))
    }

    pub async fn get_all(&self) -> Result<Vec<RoomType>, DbErr> {
        let room_types = entity::prelude::RoomType::find()
            .order_by_asc(entity::room_type::Column::RoomTypeId)
            .all(self.db)
            .await?;

        Ok(room_types.into_iter().map(RoomType::from_entity).collect())
    }

    pub async fn get_by_id(&self, room_type_id: i32) -> Result<Option<RoomType>, DbErr> {
        let room_type = entity::prelude::RoomType::find_by_id(room_type_id)
            .one(self.db)
            .await?;

        Ok(room_type.map(RoomType::from_entity))
    }

    pub async fn exists(&self, room_type_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::RoomType::find_by_id(room_type_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update(&self, params: UpdateRoomTypeParams) -> Result<RoomType, DbErr> {
        let room_type = entity::prelude::RoomType::find_by_id(params.room_type_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Room type with id {} not found",
                params.room_type_id
            )))?;

        let mut active_model: entity::room_type::ActiveModel = room_type.into();
        if let Some(type_name) = params.type_name {
            active_model.type_name = ActiveValue::Set(type_name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(base_price) = params.base_price {
            active_model.base_price = ActiveValue::Set(base_price);
        }
        if let Some(capacity) = params.capacity {
            active_model.capacity = ActiveValue::Set(capacity);
        }

        let room_type = active_model.update(self.db).await?;

        Ok(RoomType::from_entity(room_type))
    }

    pub async fn delete(&self, room_type_id: i32) -> Result<(), DbErr> {
        entity::prelude::RoomType::delete_by_id(room_type_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
