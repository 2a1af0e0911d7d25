//! Setup code service for first-admin bootstrap.
//!
//! This module provides the `SetupCodeService` for generating and validating one-time-use
//! verification codes. These codes are used during initial application setup to create
//! the first admin user. Codes are stored in-memory with a 60-second TTL and are
//! automatically invalidated after successful use or expiration.

use rand::{distr::Alphanumeric, Rng};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for setup codes in seconds.
const SETUP_CODE_TTL_SECONDS: u64 = 60;

/// Length of generated setup codes.
const SETUP_CODE_LENGTH: usize = 32;

/// Stored setup code with expiration timestamp.
#[derive(Clone)]
struct SetupCode {
    code: String,
    expires_at: Instant,
}

impl SetupCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(SETUP_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing temporary setup codes used for initial admin user creation.
///
/// Provides methods for generating one-time-use verification codes that allow the
/// first user to register with admin privileges during application setup. The code
/// is generated once on server startup if no admin user exists, logged for the
/// operator, stored in memory with a 60-second TTL, and invalidated after a
/// successful use or expiration. This ensures secure initial setup without
/// requiring pre-configured credentials.
#[derive(Clone)]
pub struct SetupCodeService {
    /// The currently active setup code, if any.
    code: Arc<RwLock<Option<SetupCode>>>,
}

impl SetupCodeService {
    /// Creates a new SetupCodeService instance with no active code.
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random setup code and stores it with a 60-second TTL.
    ///
    /// Creates a random 32-character alphanumeric string and stores it in memory.
    /// Any previously generated code is replaced.
    ///
    /// # Returns
    /// - `String` - The generated setup code
    pub async fn generate(&self) -> String {
        let code_string: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SETUP_CODE_LENGTH)
            .map(char::from)
            .collect();

        let setup_code = SetupCode::new(code_string.clone());
        *self.code.write().await = Some(setup_code);

        code_string
    }

    /// Validates the provided code against the stored setup code.
    ///
    /// Checks the input against the stored code and its expiry. A successful
    /// validation consumes the code so it cannot be used twice; an expired code
    /// is cleared and fails validation.
    ///
    /// # Arguments
    /// - `input_code` - The code string to validate
    ///
    /// # Returns
    /// - `true` - Code matched and was unexpired; the code has been consumed
    /// - `false` - Code didn't match, was expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored) if stored.is_expired() => {
                *code = None;
                false
            }
            Some(stored) if stored.matches(input_code) => {
                *code = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn validates_generated_code_once() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        // Consumed on first use
        assert!(!service.validate_and_consume(&code).await);
    }

    #[tokio::test]
    async fn rejects_wrong_code() {
        let service = SetupCodeService::new();
        let _code = service.generate().await;

        assert!(!service.validate_and_consume("wrong").await);
    }

    #[tokio::test]
    async fn rejects_when_no_code_generated() {
        let service = SetupCodeService::new();

        assert!(!service.validate_and_consume("anything").await);
    }

    #[tokio::test]
    async fn newer_code_replaces_older() {
        let service = SetupCodeService::new();
        let first = service.generate().await;
        let second = service.generate().await;

        assert!(!service.validate_and_consume(&first).await);

        // Wrong attempt above must not consume the active code
        assert!(service.validate_and_consume(&second).await);
    }
}
