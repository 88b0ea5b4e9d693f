//! Bill service factory for linking services to bills in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Charges three units of a service on a bill.
pub async fn create_bill_service(
    db: &DatabaseConnection,
    bill_id: i32,
    service_id: i32,
) -> Result<entity::bill_service::Model, DbErr> {
    entity::bill_service::ActiveModel {
        bill_id: ActiveValue::Set(bill_id),
        service_id: ActiveValue::Set(service_id),
        quantity: ActiveValue::Set(3),
        total_service_price: ActiveValue::Set(Some(46.5)),
        ..Default::default()
    }
    .insert(db)
    .await
}
