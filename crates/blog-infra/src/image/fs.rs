use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use blog_core::error::ImageError;
use blog_core::ports::ImageStore;

/// Filesystem image store: one `{id}.png` file per post under a configured
/// base directory. Writes replace the whole file.
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    /// Open the store, creating the base directory if it does not exist.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, post_id: i32) -> PathBuf {
        self.root.join(format!("{post_id}.png"))
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn save(&self, post_id: i32, bytes: &[u8]) -> Result<(), ImageError> {
        tokio::fs::write(self.path_for(post_id), bytes).await?;
        tracing::debug!(post_id, size = bytes.len(), "Stored image");
        Ok(())
    }

    async fn load(&self, post_id: i32) -> Result<Option<Vec<u8>>, ImageError> {
        match tokio::fs::read(self.path_for(post_id)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, post_id: i32) -> Result<bool, ImageError> {
        match tokio::fs::remove_file(self.path_for(post_id)).await {
            Ok(()) => {
                tracing::debug!(post_id, "Removed image");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
