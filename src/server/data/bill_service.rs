use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::bill_service::{
    BillServiceRecord, CreateBillServiceParams, UpdateBillServiceParams,
};

pub struct BillServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateBillServiceParams,
    ) -> Result<BillServiceRecord, DbErr> {
        let record = entity::bill_service::ActiveModel {
            bill_id: ActiveValue::Set(params.bill_id),
            service_id: ActiveValue::Set(params.service_id),
            quantity: ActiveValue::Set(params.quantity),
            total_service_price: ActiveValue::Set(params.total_service_price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BillServiceRecord::from_entity(record))
    }

    pub async fn get_all(&self) -> Result<Vec<BillServiceRecord>, DbErr> {
        let records = entity::prelude::BillService::find()
            .order_by_asc(entity::bill_service::Column::BillServiceId)
            .all(self.db)
            .await?;

        Ok(records
            .into_iter()
            .map(BillServiceRecord::from_entity)
            .collect())
    }

    pub async fn get_by_id(&self, bill_service_id: i32) -> Result<Option<BillServiceRecord>, DbErr> {
        let record = entity::prelude::BillService::find_by_id(bill_service_id)
            .one(self.db)
            .await?;

        Ok(record.map(BillServiceRecord::from_entity))
    }

    pub async fn exists(&self, bill_service_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::BillService::find_by_id(bill_service_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update(
        &self,
        params: UpdateBillServiceParams,
    ) -> Result<BillServiceRecord, DbErr> {
        let record = entity::prelude::BillService::find_by_id(params.bill_service_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Bill service record with id {} not found",
                params.bill_service_id
            )))?;

        let mut active_model: entity::bill_service::ActiveModel = record.into();
        if let Some(bill_id) = params.bill_id {
            active_model.bill_id = ActiveValue::Set(bill_id);
        }
        if let Some(service_id) = params.service_id {
            active_model.service_id = ActiveValue::Set(service_id);
        }
        if let Some(quantity) = params.quantity {
            active_model.quantity = ActiveValue::Set(quantity);
        }
        if let Some(total_service_price) = params.total_service_price {
            active_model.total_service_price = ActiveValue::Set(total_service_price);
        }

        let record = active_model.update(self.db).await?;

        Ok(BillServiceRecord::from_entity(record))
    }

    pub async fn delete(&self, bill_service_id: i32) -> Result<(), DbErr> {
        entity::prelude::BillService::delete_by_id(bill_service_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
