use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::auth::setup_code::SetupCodeService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the
/// application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Generates and logs a setup code when no admin account exists.
///
/// The code is valid for 60 seconds and consumed by `POST /api/auth/setup`,
/// which creates the first ADMIN user. Restarting the server generates a fresh
/// code.
///
/// # Arguments
/// - `db` - Database connection
/// - `setup_codes` - In-memory setup code store
///
/// # Returns
/// - `Ok(())` - Admin exists, or a setup code was generated and logged
/// - `Err(AppError)` - Database error while checking for admin users
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    setup_codes: &SetupCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = setup_codes.generate().await;

    tracing::warn!(
        "No admin account found. Create one within 60 seconds via POST /api/auth/setup with code: {}",
        code
    );

    Ok(())
}

/// Ensures the media directory exists before the first upload.
pub async fn ensure_media_dir(config: &Config) -> Result<(), AppError> {
    tokio::fs::create_dir_all(&config.media_dir).await?;

    Ok(())
}
