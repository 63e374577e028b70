use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

use super::entity;

/// Configuration for the database connection.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Open the database connection from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Connecting to database...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let db = Database::connect(opts).await?;
    tracing::info!("Database connected (pool: {})", config.max_connections);

    Ok(db)
}

/// Create the `posts` and `tags` tables from the entity definitions if they
/// do not exist yet. The foreign key on `tags` carries the cascade delete.
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut posts = schema.create_table_from_entity(entity::post::Entity);
    db.execute(backend.build(posts.if_not_exists())).await?;

    let mut tags = schema.create_table_from_entity(entity::tag::Entity);
    db.execute(backend.build(tags.if_not_exists())).await?;

    tracing::info!("Database schema ensured");
    Ok(())
}
