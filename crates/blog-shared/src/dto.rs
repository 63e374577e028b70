//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Write payload for a post, used by create, full update and patch.
///
/// Every field is optional on the wire: full validation treats a missing
/// required field as empty, while a patch treats it as "leave unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

/// A post as returned by the API, with its id and tag names.
///
/// Deliberately a standalone shape rather than an extension of
/// [`PostPayload`]; the server builds it explicitly from the stored entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub content: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// Optional list filters; an absent or empty filter places no constraint.
/// Parameter names are accepted in both lowercase and camelCase spellings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListPostsQuery {
    #[serde(alias = "titleFilter")]
    pub titlefilter: Option<String>,
    #[serde(alias = "categoryFilter")]
    pub categoryfilter: Option<String>,
    #[serde(alias = "tagFilter")]
    pub tagfilter: Option<String>,
}
