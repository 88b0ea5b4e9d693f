//! SeaORM entities for the hotel schema.

pub mod prelude;

pub mod bill_service;
pub mod billing;
pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod service;
pub mod staff;
