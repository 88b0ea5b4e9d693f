//! Request and response bodies of the JSON API.
//!
//! Field names follow the wire format clients already use (`guestID`, `firstName`, ...),
//! while the Rust side keeps snake_case.

pub mod api;
pub mod auth;
pub mod bill_service;
pub mod billing;
pub mod field;
pub mod guest;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod room_type;
pub mod service;
pub mod staff;
