//! Payment factory for creating test payment entities.

use crate::factory::helpers::{date, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a credit card payment of 500.0 against the given bill.
pub async fn create_payment(
    db: &DatabaseConnection,
    bill_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    entity::payment::ActiveModel {
        bill_id: ActiveValue::Set(bill_id),
        payment_method: ActiveValue::Set("Credit Card".to_string()),
        payment_date: ActiveValue::Set(date(2025, 12, 5)),
        amount_paid: ActiveValue::Set(500.0),
        transaction_id: ActiveValue::Set(Some(format!("TXN-{}", next_id()))),
        ..Default::default()
    }
    .insert(db)
    .await
}
