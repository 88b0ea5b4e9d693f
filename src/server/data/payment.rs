use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::payment::{CreatePaymentParams, Payment, UpdatePaymentParams};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, DbErr> {
        let payment = entity::payment::ActiveModel {
            bill_id: ActiveValue::Set(params.bill_id),
            payment_method: ActiveValue::Set(params.payment_method),
            payment_date: ActiveValue::Set(params.payment_date),
            amount_paid: ActiveValue::Set(params.amount_paid),
            transaction_id: ActiveValue::Set(params.transaction_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(payment))
    }

    pub async fn get_all(&self) -> Result<Vec<Payment>, DbErr> {
        let payments = entity::prelude::Payment::find()
            .order_by_asc(entity::payment::Column::PaymentId)
            .all(self.db)
            .await?;

        Ok(payments.into_iter().map(Payment::from_entity).collect())
    }

    pub async fn get_by_id(&self, payment_id: i32) -> Result<Option<Payment>, DbErr> {
        let payment = entity::prelude::Payment::find_by_id(payment_id)
            .one(self.db)
            .await?;

        Ok(payment.map(Payment::from_entity))
    }

    pub async fn exists(&self, payment_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Payment::find_by_id(payment_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update(&self, params: UpdatePaymentParams) -> Result<Payment, DbErr> {
        let payment = entity::prelude::Payment::find_by_id(params.payment_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Payment with id {} not found",
                params.payment_id
            )))?;

        let mut active_model: entity::payment::ActiveModel = payment.into();
        if let Some(bill_id) = params.bill_id {
            active_model.bill_id = ActiveValue::Set(bill_id);
        }
        if let Some(payment_method) = params.payment_method {
            active_model.payment_method = ActiveValue::Set(payment_method);
        }
        if let Some(payment_date) = params.payment_date {
            active_model.payment_date = ActiveValue::Set(payment_date);
        }
        if let Some(amount_paid) = params.amount_paid {
            active_model.amount_paid = ActiveValue::Set(amount_paid);
        }
        if let Some(transaction_id) = params.transaction_id {
            active_model.transaction_id = ActiveValue::Set(transaction_id);
        }

        let payment = active_model.update(self.db).await?;

        Ok(Payment::from_entity(payment))
    }

    pub async fn delete(&self, payment_id: i32) -> Result<(), DbErr> {
        entity::prelude::Payment::delete_by_id(payment_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
