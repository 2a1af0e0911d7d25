//! User management service.
//!
//! Account administration for the platform: creation, profile updates, password
//! resets, and deletion. All operations here are reached through admin-only
//! routes; the guard has already run by the time a service method is called.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, GetAllUsersParam, PaginatedUsers, UpdateUserParam, User},
    service::auth::password,
};

/// Service handling user account administration.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user account with an initial password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn create_user(
        &self,
        email: String,
        name: String,
        role: UserRole,
        password: &str,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(
                "A user with this email already exists".to_string(),
            ));
        }

        let password_hash = password::hash_password(password)?;

        let user = user_repo
            .create(CreateUserParam {
                email,
                name,
                role,
                password_hash,
            })
            .await?;

        Ok(user)
    }

    /// Fetches a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_user(&self, user_id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    /// Retrieves a page of users ordered by name.
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(param.page, param.per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total.div_ceil(param.per_page),
        })
    }

    /// Updates a user's name and role.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update_user(&self, param: UpdateUserParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .update_profile(param)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    /// Replaces a user's password.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn set_password(&self, user_id: i32, password: &str) -> Result<(), AppError> {
        let password_hash = password::hash_password(password)?;

        let updated = UserRepository::new(self.db)
            .set_password_hash(user_id, password_hash)
            .await?;

        if !updated {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    /// Deletes a user account.
    ///
    /// Shifts and deposits owned by the user are removed by the FK cascade.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete_user(&self, user_id: i32) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db).delete(user_id).await?;

        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
