use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no authentication token (no cookie, no bearer header).
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request has no authentication token")]
    MissingToken,

    /// Token signature, shape, or expiry validation failed.
    ///
    /// Results in a 401 Unauthorized response. The underlying reason is kept
    /// server-side; the client sees a generic message either way.
    #[error("Token validation failed: {0}")]
    InvalidToken(String),

    /// Token was valid but its subject no longer exists in the database.
    ///
    /// Happens when a user is deleted while a session is still live.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login attempt with an unknown email or wrong password.
    ///
    /// Deliberately indistinguishable between the two cases.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// First-admin setup code was wrong, expired, or already consumed.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Setup code is invalid or expired")]
    SetupCodeInvalid,
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems all collapse to the same 401 body so a caller cannot probe
/// which stage of validation failed. Role failures return 403 with a generic
/// message; the detailed reason stays in the server log via the error display.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Access denied".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::SetupCodeInvalid => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Setup code is invalid or expired".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
