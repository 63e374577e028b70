//! SeaORM post repository over SQLite.

use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use blog_core::domain::{NewPost, Post};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::entity::tag::{self, Entity as TagEntity};

/// SQLite post repository. Tag rows ride on the store's cascade delete.
pub struct SqlitePostRepository {
    db: DbConn,
}

impl SqlitePostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .find_with_related(TagEntity)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows
            .into_iter()
            .map(|(post, tags)| post.into_post(tags))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let mut rows = PostEntity::find_by_id(id)
            .find_with_related(TagEntity)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.pop().map(|(post, tags)| post.into_post(tags)))
    }

    async fn exists(&self, id: i32) -> Result<bool, RepoError> {
        let count = PostEntity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(query_err)?;

        Ok(count > 0)
    }

    async fn insert(&self, post: NewPost) -> Result<i32, RepoError> {
        let active: post::ActiveModel = post.into();
        let result = PostEntity::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| {
                let err_str = e.to_string();
                if err_str.contains("UNIQUE") || err_str.contains("constraint") {
                    RepoError::Constraint(err_str)
                } else {
                    RepoError::Query(err_str)
                }
            })?;

        tracing::debug!(post_id = result.last_insert_id, "Inserted post");
        Ok(result.last_insert_id)
    }

    async fn update(&self, id: i32, post: NewPost) -> Result<(), RepoError> {
        let active = post::ActiveModel {
            id: Unchanged(id),
            title: Set(post.title),
            author: Set(post.author),
            content: Set(post.content),
            category: Set(post.category),
        };

        active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => query_err(other),
        })?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = id, "Deleted post");
        Ok(())
    }

    async fn add_tag(&self, post_id: i32, name: &str) -> Result<(), RepoError> {
        let active = tag::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(name.to_owned()),
            post_id: Set(post_id),
        };

        TagEntity::insert(active)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(())
    }

    async fn remove_tag(&self, post_id: i32, name: &str) -> Result<bool, RepoError> {
        let result = TagEntity::delete_many()
            .filter(tag::Column::PostId.eq(post_id))
            .filter(tag::Column::Name.eq(name))
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.rows_affected > 0)
    }
}
