//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! the SeaORM/SQLite post repository, an in-memory fallback repository,
//! and the filesystem image store.

pub mod database;
pub mod image;

pub use database::{DatabaseConfig, InMemoryPostRepository, SqlitePostRepository};
pub use image::FsImageStore;
