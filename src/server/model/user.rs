//! User domain models and parameters.
//!
//! Provides domain models for application users with role-based permissions.
//! Includes parameter types for account creation and updates performed by
//! administrators and during first-admin setup.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::model::user::{PaginatedUsersDto, UserDto, UserRoleDto};

/// User with credentials, role, and creation metadata.
///
/// The password hash never leaves the domain model; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: role_to_dto(&self.role),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }

    /// Whether this user passes admin-only checks.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Maps the stored role enum to its API representation.
pub fn role_to_dto(role: &UserRole) -> UserRoleDto {
    match role {
        UserRole::Admin => UserRoleDto::Admin,
        UserRole::Processor => UserRoleDto::Processor,
        UserRole::User => UserRoleDto::User,
        UserRole::Buyer => UserRoleDto::Buyer,
    }
}

/// Maps an API role to the stored enum.
pub fn role_from_dto(role: UserRoleDto) -> UserRole {
    match role {
        UserRoleDto::Admin => UserRole::Admin,
        UserRoleDto::Processor => UserRole::Processor,
        UserRoleDto::User => UserRole::User,
        UserRoleDto::Buyer => UserRole::Buyer,
    }
}

/// Parameters for creating a user account.
///
/// The password arrives pre-hashed; hashing happens in the service layer so the
/// repository never sees plaintext credentials.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub password_hash: String,
}

/// Parameters for updating a user's profile fields.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub user_id: i32,
    pub name: String,
    pub role: UserRole,
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        let users = self.users.into_iter().map(|u| u.into_dto()).collect();

        PaginatedUsersDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
