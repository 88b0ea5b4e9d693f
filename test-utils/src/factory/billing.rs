//! Billing factory for creating test bill entities.

use crate::factory::helpers::date;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unpaid bill of 990.0 against the given reservation.
pub async fn create_bill(
    db: &DatabaseConnection,
    reservation_id: i32,
) -> Result<entity::billing::Model, DbErr> {
    entity::billing::ActiveModel {
        reservation_id: ActiveValue::Set(reservation_id),
        bill_date: ActiveValue::Set(date(2025, 12, 5)),
        sub_total: ActiveValue::Set(Some(900.0)),
        tax_amount: ActiveValue::Set(Some(90.0)),
        total_amount: ActiveValue::Set(990.0),
        payment_status: ActiveValue::Set(Some("Unpaid".to_string())),
        ..Default::default()
    }
    .insert(db)
    .await
}
