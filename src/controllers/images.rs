use crate::{ids, prelude::*, storage};

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::json;

pub async fn upload(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
    mut files: Multipart,
) -> Result<impl IntoResponse> {
    while let Some(file) = files
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("Malformed upload: {err}")))?
    {
        if file.name() != Some("image") {
            continue;
        }

        let filename = match file.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(AppError::BadRequest("File name is required".to_string())),
        };

        let content_type = file
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| storage::DEFAULT_CONTENT_TYPE.to_string());

        let data = file
            .bytes()
            .await
            .map_err(|err| AppError::BadRequest(format!("Malformed upload: {err}")))?;
        if data.is_empty() {
            return Err(AppError::BadRequest("Empty file not allowed".to_string()));
        }

        let key = ids::image_key(&room_id, &filename);
        state.images.put(&key, &data, &content_type).await?;

        tracing::info!(%room_id, %key, size = data.len(), "stored image");

        return Ok(Json(json!({ "image_url": format!("/api/images/{key}") })));
    }

    return Err(AppError::BadRequest("No image field in upload".to_string()));
}

pub async fn fetch(
    Path(path): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let Some((bytes, content_type)) = state.images.get(&path).await? else {
        return Err(AppError::NotFound("Image not found".to_string()));
    };

    // Keys are unique per upload, so the bytes behind one never change.
    return Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CACHE_CONTROL,
                "public, max-age=31536000".to_string(),
            ),
        ],
        bytes,
    ));
}
