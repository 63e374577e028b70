//! Database connection management and post repositories.

mod connections;
pub mod entity;
mod memory;
mod repo;

pub use connections::{DatabaseConfig, connect, ensure_schema};
pub use memory::InMemoryPostRepository;
pub use repo::SqlitePostRepository;
