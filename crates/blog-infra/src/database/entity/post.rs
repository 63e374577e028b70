//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use blog_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tag::Entity")]
    Tag,
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Assemble the domain Post from this row and its eagerly loaded tags.
    pub(crate) fn into_post(self, tags: Vec<super::tag::Model>) -> Post {
        Post {
            id: self.id,
            title: self.title,
            author: self.author,
            content: self.content,
            category: self.category,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Conversion from the writable domain fields to a SeaORM ActiveModel.
/// The id stays unset so the store assigns it on insert.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            author: Set(post.author),
            content: Set(post.content),
            category: Set(post.category),
        }
    }
}
