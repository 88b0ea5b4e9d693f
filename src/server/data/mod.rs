//! Database repository layer for all hotel records.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table in the schema. Repositories use SeaORM entity models internally and return domain
//! models to maintain separation between the data layer and business logic layer. All
//! database queries, inserts, updates, and deletes are performed through these repositories.

pub mod bill_service;
pub mod billing;
pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod service;
pub mod staff;

#[cfg(test)]
mod test;
