//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! hotel records and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Create parameters are where required-field checks happen; update parameters carry
//! only the columns the client supplied.

pub mod bill_service;
pub mod billing;
pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod service;
pub mod staff;

/// Result of a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No record has the given primary key.
    NotFound,
    /// The record exists but the request supplied no updatable field.
    Unchanged,
    /// The supplied columns were written.
    Updated,
}
