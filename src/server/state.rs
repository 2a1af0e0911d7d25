//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during
//! startup and then cloned for each request handler through Axum's state
//! extraction.

use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use std::sync::Arc;

use super::service::auth::{jwt::JwtService, setup_code::SetupCodeService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `JwtService` holds key material behind internal reference counting
/// - `SetupCodeService` uses `Arc` for shared state
/// - `Arc<PathBuf>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Session token service for issuing and verifying JWTs.
    pub jwt: JwtService,

    /// Service for managing temporary setup codes.
    ///
    /// Used to generate and validate the one-shot code that allows the first
    /// admin account to be created when no admin exists in the database.
    pub setup_codes: SetupCodeService,

    /// Directory uploaded media files are stored in.
    pub media_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        jwt: JwtService,
        setup_codes: SetupCodeService,
        media_dir: PathBuf,
    ) -> Self {
        Self {
            db,
            jwt,
            setup_codes,
            media_dir: Arc::new(media_dir),
        }
    }
}
