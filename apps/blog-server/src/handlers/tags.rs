//! Post tag handlers - names unique per post, case-sensitive.

use actix_web::{HttpResponse, web};

use super::post_not_found;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /Posts/{id}/Tags - body is the tag name as a JSON string.
///
/// The empty-tag check runs before the post lookup; adding a name the post
/// already carries is a no-op success.
pub async fn add_tag(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<String>,
) -> AppResult<HttpResponse> {
    let tag = body.into_inner();
    if tag.is_empty() {
        return Err(AppError::BadRequest("Empty Tag".to_string()));
    }

    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    if post.has_tag(&tag) {
        return Ok(HttpResponse::Ok().finish());
    }

    state.posts.add_tag(id, &tag).await?;
    Ok(HttpResponse::Ok().finish())
}

/// DELETE /Posts/{id}/Tags/{tag}
pub async fn remove_tag(
    state: web::Data<AppState>,
    path: web::Path<(i32, String)>,
) -> AppResult<HttpResponse> {
    let (id, tag) = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    if !post.has_tag(&tag) {
        return Err(AppError::NotFound(format!(
            "Tag \"{tag}\" in Post Id={id} not found"
        )));
    }

    state.posts.remove_tag(id, &tag).await?;
    Ok(HttpResponse::Ok().finish())
}
