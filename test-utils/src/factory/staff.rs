//! Staff factory for creating test staff entities.
//!
//! The factory stores whatever password hash it is given; tests exercising login
//! hash a real password first and pass it through `password_hash`.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test staff members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::staff::StaffFactory;
///
/// let staff = StaffFactory::new(&db)
///     .username("manager")
///     .role("Manager")
///     .build()
///     .await?;
/// ```
pub struct StaffFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password_hash: String,
    role: String,
}

impl<'a> StaffFactory<'a> {
    /// Creates a new StaffFactory with default values.
    ///
    /// Defaults:
    /// - username: `"staff_{id}"` where id is auto-incremented
    /// - email: `"staff_{id}@hotel.test"`
    /// - password_hash: a placeholder that no password verifies against
    /// - role: `"Receptionist"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("staff_{}", id),
            email: format!("staff_{}@hotel.test", id),
            password_hash: "unusable-hash".to_string(),
            role: "Receptionist".to_string(),
        }
    }

    /// Sets the login username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the staff role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the staff entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::staff::Model)` - Created staff entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::staff::Model, DbErr> {
        entity::staff::ActiveModel {
            first_name: ActiveValue::Set("Test".to_string()),
            last_name: ActiveValue::Set("Staff".to_string()),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set(None),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            address: ActiveValue::Set(None),
            date_of_hire: ActiveValue::Set(None),
            salary: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a staff member with default values.
///
/// Shorthand for `StaffFactory::new(db).build().await`.
pub async fn create_staff(db: &DatabaseConnection) -> Result<entity::staff::Model, DbErr> {
    StaffFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_staff_with_unique_usernames() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Staff).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_staff(db).await?;
        let second = create_staff(db).await?;

        assert_ne!(first.username, second.username);
        assert_eq!(first.role, "Receptionist");

        Ok(())
    }
}
