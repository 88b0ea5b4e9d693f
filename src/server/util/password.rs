//! Argon2 password hashing for staff credentials.
//!
//! Hashes are stored in PHC string format, so the salt and parameters travel with the
//! hash and verification needs nothing else.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash
/// - `Err(AppError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::PasswordHash(e.to_string()))
}

/// Checks a password against a stored hash.
///
/// A stored value that is not a valid PHC string never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_correct_password() {
        let hash = hash_password("front-desk-2024").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("front-desk-2024", &hash));
        assert!(!verify_password("front-desk-2025", &hash));
    }

    #[test]
    fn salts_each_hash() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn rejects_malformed_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
