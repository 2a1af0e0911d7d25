//! JWT session token issuing and verification.
//!
//! Umbra sessions are stateless: login issues an HS256 token carried in an
//! HttpOnly cookie, and every guarded request verifies it against the shared
//! server secret. Expiry is enforced by the `exp` claim.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject (user id, stringified).
    pub sub: String,
    /// Issued at time (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

/// Issues and verifies session tokens with a shared HS256 secret.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtService {
    /// Creates a token service from the configured secret and TTL.
    ///
    /// # Arguments
    /// - `secret` - Shared HS256 signing secret
    /// - `ttl_hours` - Token lifetime in hours
    ///
    /// # Returns
    /// - `JwtService` - Service ready to issue and verify tokens
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Issues a signed session token for a user.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the authenticated user
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AppError::InternalError)` - Token encoding failed
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to encode session token: {}", e)))
    }

    /// Verifies a token and returns its claims.
    ///
    /// Validates the signature and the `exp` claim. Any failure maps to
    /// `AuthError::InvalidToken`, which renders as 401.
    ///
    /// # Arguments
    /// - `token` - Encoded JWT from the session cookie or bearer header
    ///
    /// # Returns
    /// - `Ok(SessionClaims)` - Token is valid and unexpired
    /// - `Err(AppError::AuthErr(InvalidToken))` - Signature, shape, or expiry check failed
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(data.claims)
    }

    /// Token lifetime, used to set the cookie max-age alongside the claim.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
