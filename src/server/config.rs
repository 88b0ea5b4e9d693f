use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

pub struct Config {
    pub database_url: String,

    /// Socket address the HTTP server listens on.
    pub bind_address: String,

    /// Password given to the default staff accounts when the staff table is empty.
    /// Seeding is skipped when unset.
    pub seed_staff_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            seed_staff_password: std::env::var("SEED_STAFF_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty()),
        })
    }
}
