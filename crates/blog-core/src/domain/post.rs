use serde::{Deserialize, Serialize};

/// Post entity - the primary content resource, with its owned tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub content: String,
    pub category: Option<String>,
    pub tags: Vec<Tag>,
}

impl Post {
    /// Whether a tag with this exact name (case-sensitive) is attached.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }
}

/// Tag entity - a named label scoped to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// The writable fields of a post, as accepted at every write boundary.
/// The store assigns the id; tags are managed through their own operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub author: String,
    pub content: String,
    pub category: Option<String>,
}
