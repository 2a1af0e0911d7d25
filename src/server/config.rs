use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MEDIA_DIR: &str = "media";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 168;

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub token_ttl_hours: i64,

    pub bind_addr: String,
    pub media_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let token_ttl_hours = match std::env::var("TOKEN_TTL_HOURS") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "TOKEN_TTL_HOURS".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            token_ttl_hours,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            media_dir: std::env::var("MEDIA_DIR").unwrap_or_else(|_| DEFAULT_MEDIA_DIR.to_string()),
        })
    }
}
