use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Application role carried by every user account.
///
/// Serialized in the upper-case form used throughout the API
/// (`"ADMIN"`, `"PROCESSOR"`, `"USER"`, `"BUYER"`).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRoleDto {
    Admin,
    Processor,
    User,
    Buyer,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRoleDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub name: String,
    pub role: UserRoleDto,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateUserDto {
    pub name: String,
    pub role: UserRoleDto,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SetPasswordDto {
    pub password: String,
}
