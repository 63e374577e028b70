//! Post image handlers - one optional PNG per post.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures::TryStreamExt;

use super::post_not_found;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart form field carrying the image.
const IMAGE_FIELD: &str = "imageFile";

const ALLOWED_EXTENSION: &str = ".png";

struct ImageUpload {
    filename: String,
    bytes: Vec<u8>,
}

/// Drain the multipart payload and pick out the image field, if any.
/// A malformed or absent payload reads the same as a missing field.
async fn read_image_field(mut payload: Multipart) -> Option<ImageUpload> {
    while let Ok(Some(mut field)) = payload.try_next().await {
        let is_image_field = field
            .name()
            .is_some_and(|n| n.eq_ignore_ascii_case(IMAGE_FIELD));
        if !is_image_field {
            continue;
        }

        let filename = field.content_disposition()?.get_filename()?.to_owned();

        let mut bytes = Vec::new();
        while let Ok(Some(chunk)) = field.try_next().await {
            bytes.extend_from_slice(&chunk);
        }

        return Some(ImageUpload { filename, bytes });
    }

    None
}

/// POST /Posts/{id}/Image - store or fully replace the post's image.
pub async fn upload_image(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !state.posts.exists(id).await? {
        return Err(post_not_found(id));
    }

    let Some(upload) = read_image_field(payload).await else {
        return Err(AppError::BadRequest("Image is empty".to_string()));
    };

    if !upload.filename.to_lowercase().ends_with(ALLOWED_EXTENSION) {
        return Err(AppError::BadRequest(
            "Image with bad extension, allowed *.png".to_string(),
        ));
    }

    state.images.save(id, &upload.bytes).await?;
    Ok(HttpResponse::Ok().finish())
}

/// GET /Posts/{id}/Image - raw bytes. The file probe alone decides the 404;
/// a missing post and a missing image are indistinguishable here.
pub async fn get_image(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.images.load(id).await? {
        Some(bytes) => Ok(HttpResponse::Ok().content_type("image/png").body(bytes)),
        None => Err(AppError::NotFound(format!(
            "Image for Post Id={id} not found"
        ))),
    }
}

/// DELETE /Posts/{id}/Image
pub async fn delete_image(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !state.posts.exists(id).await? {
        return Err(post_not_found(id));
    }

    if !state.images.delete(id).await? {
        return Err(AppError::NotFound(format!(
            "Image of Post Id={id} not found"
        )));
    }

    Ok(HttpResponse::Ok().finish())
}
