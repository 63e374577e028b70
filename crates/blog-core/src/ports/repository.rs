use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post repository - CRUD against the persistent store.
///
/// Every read returns posts with their tags eagerly loaded. Deleting a post
/// cascades to its tags at the store level. Tag-name uniqueness within a post
/// is the caller's concern; `add_tag` is a plain insert.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, with tags.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// A single post by id, with tags.
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Whether a post with this id exists.
    async fn exists(&self, id: i32) -> Result<bool, RepoError>;

    /// Insert a new post and return its store-assigned id.
    async fn insert(&self, post: NewPost) -> Result<i32, RepoError>;

    /// Overwrite all writable fields of an existing post. Tags are untouched.
    async fn update(&self, id: i32, post: NewPost) -> Result<(), RepoError>;

    /// Delete a post; its tags go with it.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;

    /// Attach a tag to a post.
    async fn add_tag(&self, post_id: i32, name: &str) -> Result<(), RepoError>;

    /// Detach the named tag from a post. Returns whether a tag was removed.
    async fn remove_tag(&self, post_id: i32, name: &str) -> Result<bool, RepoError>;
}
