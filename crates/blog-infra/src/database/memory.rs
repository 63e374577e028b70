//! In-memory post repository - used as fallback when no database is
//! configured, and as the repository double in handler tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{NewPost, Post, Tag};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

struct Store {
    posts: Vec<Post>,
    next_post_id: i32,
    next_tag_id: i32,
}

/// In-memory repository with the same observable semantics as the SQLite
/// one: ids start at 1, tags live inside their post and die with it.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: Vec::new(),
                next_post_id: 1,
                next_tag_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.iter().any(|p| p.id == id))
    }

    async fn insert(&self, post: NewPost) -> Result<i32, RepoError> {
        let mut store = self.store.write().await;
        let id = store.next_post_id;
        store.next_post_id += 1;

        store.posts.push(Post {
            id,
            title: post.title,
            author: post.author,
            content: post.content,
            category: post.category,
            tags: Vec::new(),
        });

        Ok(id)
    }

    async fn update(&self, id: i32, post: NewPost) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let existing = store
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        existing.title = post.title;
        existing.author = post.author;
        existing.content = post.content;
        existing.category = post.category;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.posts.len();
        store.posts.retain(|p| p.id != id);

        if store.posts.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn add_tag(&self, post_id: i32, name: &str) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let tag_id = store.next_tag_id;
        let post = store
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(RepoError::NotFound)?;

        post.tags.push(Tag {
            id: tag_id,
            name: name.to_owned(),
        });
        store.next_tag_id += 1;

        Ok(())
    }

    async fn remove_tag(&self, post_id: i32, name: &str) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        let post = store
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(RepoError::NotFound)?;

        let before = post.tags.len();
        post.tags.retain(|t| t.name != name);

        Ok(post.tags.len() != before)
    }
}
