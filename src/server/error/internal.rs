use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse an id from a String.
    ///
    /// Occurs when a token subject claim cannot be parsed back into a user id.
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Password hashing or verification failed for reasons other than a mismatch.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
