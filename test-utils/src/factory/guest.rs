//! Guest factory for creating test guest entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a guest with a unique email and id proof.
///
/// # Returns
/// - `Ok(entity::guest::Model)` - Created guest entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guest(db: &DatabaseConnection) -> Result<entity::guest::Model, DbErr> {
    let id = next_id();
    entity::guest::ActiveModel {
        first_name: ActiveValue::Set("Alice".to_string()),
        last_name: ActiveValue::Set(format!("Guest {}", id)),
        email: ActiveValue::Set(format!("guest_{}@hotel.test", id)),
        phone_number: ActiveValue::Set(Some("5551112222".to_string())),
        address: ActiveValue::Set(None),
        id_proof: ActiveValue::Set(format!("PAS-{}", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}
