//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub images_dir: PathBuf,
    pub admin_token: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            images_dir: env::var("IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("images")),
            admin_token: env::var("ADMIN_ROLE_TOKEN")
                .unwrap_or_else(|_| "ADMIN_TOKEN".to_string()),
        }
    }
}
