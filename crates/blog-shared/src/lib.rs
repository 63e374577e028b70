//! # Blog Shared
//!
//! Wire types shared between the server and any client of the API.

pub mod dto;

pub use dto::{ListPostsQuery, PostPayload, PostResponse};
