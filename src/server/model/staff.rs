//! Staff domain models and parameters.
//!
//! Passwords are hashed while the request body is converted into parameters, so nothing
//! past the controller boundary ever holds a plaintext password. The stored hash is kept
//! on the domain model for login checks and dropped when converting to a DTO.

use chrono::NaiveDate;

use crate::{
    model::staff::{CreateStaffDto, StaffDto, UpdateStaffDto},
    server::{
        error::AppError,
        util::{
            password::hash_password,
            validate::{optional_text, RequiredFields},
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub username: String,
    /// Argon2 PHC hash of the staff member's password.
    pub password_hash: String,
    pub role: String,
    pub address: Option<String>,
    pub date_of_hire: Option<NaiveDate>,
    pub salary: Option<f64>,
}

impl Staff {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::staff::Model) -> Self {
        Self {
            staff_id: entity.staff_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone_number: entity.phone_number,
            username: entity.username,
            password_hash: entity.password_hash,
            role: entity.role,
            address: entity.address,
            date_of_hire: entity.date_of_hire,
            salary: entity.salary,
        }
    }

    /// Converts domain model to DTO for API responses, leaving out the password hash.
    pub fn into_dto(self) -> StaffDto {
        StaffDto {
            staff_id: self.staff_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            username: self.username,
            role: self.role,
            address: self.address,
            date_of_hire: self.date_of_hire,
            salary: self.salary,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStaffParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub address: Option<String>,
    pub date_of_hire: Option<NaiveDate>,
    pub salary: Option<f64>,
}

impl CreateStaffParams {
    /// Checks required fields, then hashes the supplied password.
    ///
    /// # Returns
    /// - `Ok(CreateStaffParams)` - Parameters with the password already hashed
    /// - `Err(AppError::BadRequest)` - Missing firstName, lastName, email, username, password or role
    /// - `Err(AppError::PasswordHash)` - Hashing failed
    pub fn from_dto(dto: CreateStaffDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let first_name = required.text("firstName", dto.first_name);
        let last_name = required.text("lastName", dto.last_name);
        let email = required.text("email", dto.email);
        let username = required.text("username", dto.username);
        let password = required.text("password", dto.password);
        let role = required.text("role", dto.role);
        required.finish()?;

        Ok(Self {
            first_name,
            last_name,
            email,
            phone_number: optional_text(dto.phone_number),
            username,
            password_hash: hash_password(&password)?,
            role,
            address: optional_text(dto.address),
            date_of_hire: dto.date_of_hire,
            salary: dto.salary,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStaffParams {
    pub staff_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
    pub address: Option<Option<String>>,
    pub date_of_hire: Option<Option<NaiveDate>>,
    pub salary: Option<Option<f64>>,
}

impl UpdateStaffParams {
    /// Converts the update body, hashing a new password when one was supplied.
    ///
    /// A blank password is rejected the same way create and login reject it.
    pub fn from_dto(staff_id: i32, dto: UpdateStaffDto) -> Result<Self, AppError> {
        let password_hash = match dto.password {
            Some(password) => {
                let mut required = RequiredFields::new();
                let password = required.text("password", Some(password));
                required.finish()?;

                Some(hash_password(&password)?)
            }
            None => None,
        };

        Ok(Self {
            staff_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone_number: dto.phone_number,
            username: dto.username,
            password_hash,
            role: dto.role,
            address: dto.address,
            date_of_hire: dto.date_of_hire,
            salary: dto.salary,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.username.is_none()
            && self.password_hash.is_none()
            && self.role.is_none()
            && self.address.is_none()
            && self.date_of_hire.is_none()
            && self.salary.is_none()
    }
}
