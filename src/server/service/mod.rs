//! Service layer for orchestration between controllers and repositories.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They work with domain models rather than DTOs or entity models and own the
//! existence-check-then-mutate sequence every update and delete follows. Each statement
//! runs on its own pooled connection; no multi-table transactions are opened.

pub mod auth;
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
