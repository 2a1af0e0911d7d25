//! Argon2id password hashing.
//!
//! Hashes are stored in PHC string format, so parameters travel with the hash
//! and can be strengthened later without invalidating existing credentials.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Well-formed argon2id hash with default parameters that no password matches.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Burns a verification against [`DUMMY_HASH`] and discards the outcome.
///
/// The unknown-email login path calls this so it costs the same argon2 work as
/// a real verification; otherwise response timing would reveal which emails
/// have accounts.
pub fn verify_dummy(password: &str) {
    if let Ok(parsed) = PasswordHash::new(DUMMY_HASH) {
        let _ = Argon2::default().verify_password(password.as_bytes(), &parsed);
    }
}

/// Hashes a plaintext password with a fresh random salt.
///
/// # Arguments
/// - `password` - Plaintext password to hash
///
/// # Returns
/// - `Ok(String)` - PHC-format argon2id hash
/// - `Err(AppError::InternalErr(PasswordHash))` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC hash.
///
/// A mismatch returns `Ok(false)`; only a malformed stored hash is an error.
///
/// # Arguments
/// - `password` - Plaintext candidate
/// - `stored_hash` - PHC-format hash from the user row
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalErr(PasswordHash))` - Stored hash could not be parsed
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
