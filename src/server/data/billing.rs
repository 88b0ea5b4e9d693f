use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::billing::{Bill, CreateBillParams, UpdateBillParams};

pub struct BillRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBillParams) -> Result<Bill, DbErr> {
        let bill = entity::billing::ActiveModel {
            reservation_id: ActiveValue::Set(params.reservation_id),
            bill_date: ActiveValue::Set(params.bill_date),
            sub_total: ActiveValue::Set(params.sub_total),
            tax_amount: ActiveValue::Set(params.tax_amount),
            total_amount: ActiveValue::Set(params.total_amount),
            payment_status: ActiveValue::Set(params.payment_status),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Bill::from_entity(bill))
    }

    pub async fn get_all(&self) -> Result<Vec<Bill>, DbErr> {
        let bills = entity::prelude::Billing::find()
            .order_by_asc(entity::billing::Column::BillId)
            .all(self.db)
            .await?;

        Ok(bills.into_iter().map(Bill::from_entity).collect())
    }

    pub async fn get_by_id(&self, bill_id: i32) -> Result<Option<Bill>, DbErr> {
        let bill = entity::prelude::Billing::find_by_id(bill_id)
            .one(self.db)
            .await?;

        Ok(bill.map(Bill::from_entity))
    }

    pub async fn exists(&self, bill_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Billing::find_by_id(bill_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update(&self, params: UpdateBillParams) -> Result<Bill, DbErr> {
        let bill = entity::prelude::Billing::find_by_id(params.bill_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Bill with id {} not found",
                params.bill_id
            )))?;

        let mut active_model: entity::billing::ActiveModel = bill.into();
        if let Some(reservation_id) = params.reservation_id {
            active_model.reservation_id = ActiveValue::Set(reservation_id);
        }
        if let Some(bill_date) = params.bill_date {
            active_model.bill_date = ActiveValue::Set(bill_date);
        }
        if let Some(sub_total) = params.sub_total {
            active_model.sub_total = ActiveValue::Set(sub_total);
        }
        if let Some(tax_amount) = params.tax_amount {
            active_model.tax_amount = ActiveValue::Set(tax_amount);
        }
        if let Some(total_amount) = params.total_amount {
            active_model.total_amount = ActiveValue::Set(total_amount);
        }
        if let Some(payment_status) = params.payment_status {
            active_model.payment_status = ActiveValue::Set(payment_status);
        }

        let bill = active_model.update(self.db).await?;

        Ok(Bill::from_entity(bill))
    }

    /// Deletes a bill; its payments and bill service records go with it
    pub async fn delete(&self, bill_id: i32) -> Result<(), DbErr> {
        entity::prelude::Billing::delete_by_id(bill_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
