//! Post resource handlers.

use actix_web::{HttpRequest, HttpResponse, web};

use blog_core::domain::{NewPost, Post};
use blog_core::validate;
use blog_shared::dto::{ListPostsQuery, PostPayload, PostResponse};

use super::post_not_found;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Header carrying the shared admin secret for deletions.
pub const ADMIN_TOKEN_HEADER: &str = "AdminRoleToken";

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        author: post.author,
        content: post.content,
        category: post.category,
        tags: post.tags.into_iter().map(|t| t.name).collect(),
    }
}

// Only called after validation; required fields are known to be present.
fn to_new_post(payload: PostPayload) -> NewPost {
    NewPost {
        title: payload.title.unwrap_or_default(),
        author: payload.author.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
        category: payload.category,
    }
}

/// GET /Posts - list with optional title/category/tag filters, AND-combined.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let mut posts = state.posts.find_all().await?;

    if let Some(filter) = query.titlefilter.as_deref().filter(|f| !f.is_empty()) {
        let wanted = filter.to_lowercase();
        posts.retain(|p| p.title.to_lowercase() == wanted);
    }

    if let Some(filter) = query.categoryfilter.as_deref().filter(|f| !f.is_empty()) {
        posts.retain(|p| p.category.as_deref() == Some(filter));
    }

    if let Some(filter) = query.tagfilter.as_deref().filter(|f| !f.is_empty()) {
        posts.retain(|p| p.has_tag(filter));
    }

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /Posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /Posts - returns the assigned id as a plain body.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    validate::validate_full(
        payload.title.as_deref(),
        payload.author.as_deref(),
        payload.content.as_deref(),
    )?;

    let id = state.posts.insert(to_new_post(payload)).await?;
    tracing::info!(post_id = id, "Created post");

    Ok(HttpResponse::Ok().body(id.to_string()))
}

/// PUT /Posts/{id} - full replace. Validation runs before the existence
/// lookup; both failures are observable through the status code.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    validate::validate_full(
        payload.title.as_deref(),
        payload.author.as_deref(),
        payload.content.as_deref(),
    )?;

    let id = path.into_inner();
    if !state.posts.exists(id).await? {
        return Err(post_not_found(id));
    }

    state.posts.update(id, to_new_post(payload)).await?;
    Ok(HttpResponse::Ok().finish())
}

/// PATCH /Posts/{id} - partial replace; missing fields keep prior values.
pub async fn patch_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    validate::validate_partial(
        payload.title.as_deref(),
        payload.author.as_deref(),
        payload.content.as_deref(),
    )?;

    let id = path.into_inner();
    let existing = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    let merged = NewPost {
        title: payload.title.unwrap_or(existing.title),
        author: payload.author.unwrap_or(existing.author),
        content: payload.content.unwrap_or(existing.content),
        category: payload.category.or(existing.category),
    };

    state.posts.update(id, merged).await?;
    Ok(HttpResponse::Ok().finish())
}

/// DELETE /Posts/{id} - requires the admin token header; authorization is
/// checked before the post is even looked up. Cascades to tags and removes
/// the image file, if one exists, as a final step.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let token = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    if token != Some(state.admin_token.as_str()) {
        return Err(AppError::Unauthorized);
    }

    let id = path.into_inner();
    if !state.posts.exists(id).await? {
        return Err(post_not_found(id));
    }

    state.posts.delete(id).await?;

    // The image file lives outside the store's transaction; removed last.
    state.images.delete(id).await?;
    tracing::info!(post_id = id, "Deleted post");

    Ok(HttpResponse::Ok().finish())
}
