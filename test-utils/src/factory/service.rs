//! Service factory for creating test hotel service entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a laundry service priced at 15.5 per unit.
pub async fn create_service(db: &DatabaseConnection) -> Result<entity::service::Model, DbErr> {
    entity::service::ActiveModel {
        service_name: ActiveValue::Set(format!("Laundry {}", next_id())),
        description: ActiveValue::Set(Some("Same-day laundry and pressing".to_string())),
        unit_price: ActiveValue::Set(15.5),
        ..Default::default()
    }
    .insert(db)
    .await
}
