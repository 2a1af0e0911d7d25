mod model;
mod server;

use std::path::PathBuf;

use crate::server::{
    config::Config, router, service::auth::jwt::JwtService,
    service::auth::setup_code::SetupCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::ensure_media_dir(&config).await?;

    let jwt = JwtService::new(&config.jwt_secret, config.token_ttl_hours);
    let setup_codes = SetupCodeService::new();

    // Generate a first-admin setup code if no admin account exists yet
    startup::check_for_admin(&db, &setup_codes).await?;

    let media_dir = PathBuf::from(&config.media_dir);
    let app = router::router(&media_dir)
        .with_state(AppState::new(db, jwt, setup_codes, media_dir.clone()));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
