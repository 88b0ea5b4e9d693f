//! Helpers shared by the parameter models and services.

pub mod json;
pub mod password;
pub mod validate;
