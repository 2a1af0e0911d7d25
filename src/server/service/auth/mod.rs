//! Authentication services: credentials, session tokens, first-admin setup.

pub mod jwt;
pub mod password;
pub mod setup_code;

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, User},
    service::auth::setup_code::SetupCodeService,
};

/// Service handling credential verification and first-admin bootstrap.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies an email/password pair and returns the matching user.
    ///
    /// Unknown email and wrong password both map to `InvalidCredentials` so
    /// the response does not reveal which accounts exist.
    ///
    /// # Arguments
    /// - `email` - Login email
    /// - `password` - Plaintext password candidate
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            // Burn a verification so this path costs the same as a wrong password.
            password::verify_dummy(password);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Creates the first admin account from a valid setup code.
    ///
    /// The code is single-use and only honored while no admin exists; once an
    /// admin account is present the endpoint is closed regardless of the code.
    ///
    /// # Arguments
    /// - `setup_codes` - In-memory setup code store
    /// - `code` - Code supplied by the operator
    /// - `email` / `name` / `password` - Fields of the admin account to create
    ///
    /// # Returns
    /// - `Ok(User)` - Created admin user
    /// - `Err(AppError::AuthErr(SetupCodeInvalid))` - Bad, expired, or consumed code,
    ///   or an admin already exists
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn setup_first_admin(
        &self,
        setup_codes: &SetupCodeService,
        code: &str,
        email: String,
        name: String,
        password: &str,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.admin_exists().await? {
            return Err(AuthError::SetupCodeInvalid.into());
        }

        if !setup_codes.validate_and_consume(code).await {
            return Err(AuthError::SetupCodeInvalid.into());
        }

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
                role: UserRole::Admin,
                password_hash,
            })
            .await?;

        tracing::info!("First admin account created: {}", user.email);

        Ok(user)
    }
}
