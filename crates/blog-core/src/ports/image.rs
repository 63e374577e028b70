use async_trait::async_trait;

use crate::error::ImageError;

/// Image store - at most one binary blob per post, keyed by the post id.
///
/// Storage lives in a separate domain from the post records; keeping the two
/// in sync on delete is the caller's job.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write the image for a post, fully replacing any prior one.
    async fn save(&self, post_id: i32, bytes: &[u8]) -> Result<(), ImageError>;

    /// Read the image for a post, or `None` if there is none.
    async fn load(&self, post_id: i32) -> Result<Option<Vec<u8>>, ImageError>;

    /// Remove the image for a post. Returns whether one existed.
    async fn delete(&self, post_id: i32) -> Result<bool, ImageError>;
}
