//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{ImageStore, PostRepository};
use blog_infra::{FsImageStore, InMemoryPostRepository, SqlitePostRepository, database};

use crate::config::AppConfig;

/// Shared application state. The admin token is injected here once at
/// startup; handlers never read configuration ambiently.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub images: Arc<dyn ImageStore>,
    pub admin_token: String,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> std::io::Result<Self> {
        let posts: Arc<dyn PostRepository> = if let Some(db_config) = &config.database {
            match database::connect(db_config).await {
                Ok(db) => match database::ensure_schema(&db).await {
                    Ok(()) => Arc::new(SqlitePostRepository::new(db)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to create database schema: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostRepository::new())
                    }
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryPostRepository::new())
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running with the in-memory repository.");
            Arc::new(InMemoryPostRepository::new())
        };

        let images = Arc::new(FsImageStore::new(&config.images_dir)?);

        tracing::info!("Application state initialized");

        Ok(Self {
            posts,
            images,
            admin_token: config.admin_token.clone(),
        })
    }
}
