//! Guest domain models and parameters.

use crate::{
    model::guest::{CreateGuestDto, GuestDto, UpdateGuestDto},
    server::{
        error::AppError,
        util::validate::{optional_text, RequiredFields},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    pub guest_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub id_proof: String,
}

impl Guest {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::guest::Model) -> Self {
        Self {
            guest_id: entity.guest_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone_number: entity.phone_number,
            address: entity.address,
            id_proof: entity.id_proof,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> GuestDto {
        GuestDto {
            guest_id: self.guest_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            id_proof: self.id_proof,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGuestParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub id_proof: String,
}

impl CreateGuestParams {
    /// Checks required fields and converts the request body into create parameters.
    ///
    /// # Returns
    /// - `Ok(CreateGuestParams)` - All required fields present
    /// - `Err(AppError::BadRequest)` - One or more of firstName, lastName, email, idProof missing
    pub fn from_dto(dto: CreateGuestDto) -> Result<Self, AppError> {
        let mut required = RequiredFields::new();
        let first_name = required.text("firstName", dto.first_name);
        let last_name = required.text("lastName", dto.last_name);
        let email = required.text("email", dto.email);
        let id_proof = required.text("idProof", dto.id_proof);
        required.finish()?;

        Ok(Self {
            first_name,
            last_name,
            email,
            phone_number: optional_text(dto.phone_number),
            address: optional_text(dto.address),
            id_proof,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGuestParams {
    pub guest_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub id_proof: Option<String>,
}

impl UpdateGuestParams {
    pub fn from_dto(guest_id: i32, dto: UpdateGuestDto) -> Self {
        Self {
            guest_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone_number: dto.phone_number,
            address: dto.address,
            id_proof: dto.id_proof,
        }
    }

    /// True when the request supplied no updatable column.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.address.is_none()
            && self.id_proof.is_none()
    }
}
