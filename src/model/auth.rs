use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Payload for the one-time first-admin bootstrap endpoint.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SetupDto {
    /// Setup code printed to the server log at startup.
    pub code: String,
    pub email: String,
    pub name: String,
    pub password: String,
}
