//! Presence checks for create request bodies.
//!
//! Create DTOs deserialize every column as `Option` so that a body missing several fields
//! can be reported in one response. [`RequiredFields`] collects the JSON keys that were
//! absent, null or blank and turns them into a single 400 error.

use crate::server::error::AppError;

/// Collects missing required fields while a create DTO is converted into params.
///
/// Accessors return a default placeholder for a missing value; the placeholder is never
/// used because [`RequiredFields::finish`] fails whenever anything was recorded as missing.
///
/// # Example
///
/// ```rust,ignore
/// let mut required = RequiredFields::new();
/// let email = required.text("email", dto.email);
/// let capacity = required.value("capacity", dto.capacity);
/// required.finish()?;
/// ```
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a required string, treating whitespace-only input as missing.
    pub fn text(&mut self, key: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.missing.push(key);
                String::new()
            }
        }
    }

    /// Takes a required non-string value. Zero is a valid value.
    pub fn value<T: Default>(&mut self, key: &'static str, value: Option<T>) -> T {
        match value {
            Some(v) => v,
            None => {
                self.missing.push(key);
                T::default()
            }
        }
    }

    /// Fails with `Missing required fields: a, b` if any field was missing.
    pub fn finish(self) -> Result<(), AppError> {
        if self.missing.is_empty() {
            return Ok(());
        }

        Err(AppError::BadRequest(format!(
            "Missing required fields: {}",
            self.missing.join(", ")
        )))
    }
}

/// Normalizes an optional string so blank input is stored as NULL.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
