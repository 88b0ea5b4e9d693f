//! Username and password check for staff logins.
//!
//! No session or token is issued; a successful check only returns the staff record.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::staff::StaffRepository,
    error::{auth::AuthError, AppError},
    model::staff::Staff,
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a staff member's credentials.
    ///
    /// An unknown username and a wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok(Staff)` - Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, username: &str, password: &str) -> Result<Staff, AppError> {
        let repo = StaffRepository::new(self.db);

        let Some(staff) = repo.find_by_username(username).await? else {
            tracing::debug!("Login attempt for unknown username");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &staff.password_hash) {
            tracing::debug!("Login attempt with wrong password for staff {}", staff.staff_id);
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("Staff {} logged in", staff.staff_id);

        Ok(staff)
    }
}
