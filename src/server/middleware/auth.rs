//! Request authentication guard.
//!
//! Controllers construct an `AuthGuard` per request and call `require` with the
//! permissions the endpoint demands. The guard pulls the session token from the
//! auth cookie (or an `Authorization: Bearer` header for non-browser clients),
//! verifies it, and loads the user it names.

use axum::http::{header, HeaderMap};
use cookie::Cookie;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    controller::auth::AUTH_COOKIE_NAME,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::jwt::JwtService,
    util::parse::parse_i32_from_string,
};

pub enum Permission {
    Admin,
    /// Satisfied by the PROCESSOR role or by ADMIN.
    Processor,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Authenticates the request and checks the required permissions.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the endpoint requires; empty means any
    ///   authenticated user
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user satisfying every permission
    /// - `Err(AppError::AuthErr(..))` - Missing/invalid token, deleted user,
    ///   or insufficient role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.extract_token()?;
        let claims = self.jwt.verify(&token)?;
        let user_id = parse_i32_from_string(claims.sub)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "endpoint requires the ADMIN role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Processor => {
                    if user.role != UserRole::Processor && user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "endpoint requires the PROCESSOR role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Pulls the session token from the auth cookie, falling back to a bearer
    /// header.
    fn extract_token(&self) -> Result<String, AppError> {
        if let Some(cookie_header) = self.headers.get(header::COOKIE) {
            let raw = cookie_header
                .to_str()
                .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

            for cookie in Cookie::split_parse(raw).flatten() {
                if cookie.name() == AUTH_COOKIE_NAME {
                    return Ok(cookie.value().to_string());
                }
            }
        }

        if let Some(auth_header) = self.headers.get(header::AUTHORIZATION) {
            let raw = auth_header
                .to_str()
                .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

            if let Some(token) = raw.strip_prefix("Bearer ") {
                return Ok(token.to_string());
            }
        }

        Err(AuthError::MissingToken.into())
    }
}
