use super::utils;

use crate::{
    models::{BoardItem, ITEM_TYPES, ITEM_TYPE_IMAGE},
    prelude::*,
};

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    return router
        .route("/api/rooms/:room_id/board", get(list_items).post(add_item))
        .route("/api/rooms/:room_id/board/:item_id", delete(delete_item));
}

async fn list_items(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let items: Vec<BoardItem> = sqlx::query_as(
        "SELECT * FROM board_items WHERE room_id = ? ORDER BY created_at ASC, id ASC",
    )
    .bind(&room_id)
    .fetch_all(&state.db)
    .await?;

    return Ok(Json(json!({ "items": items })));
}

#[derive(Debug, Deserialize)]
struct AddItem {
    r#type: String,
    content: String,
    author_name: Option<String>,
    image_url: Option<String>,
}

async fn add_item(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<AddItem>,
) -> Result<impl IntoResponse> {
    if !ITEM_TYPES.contains(&body.r#type.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unknown item type: {}",
            body.r#type
        )));
    }
    if body.r#type == ITEM_TYPE_IMAGE && body.image_url.is_none() {
        return Err(AppError::BadRequest(
            "Image items require an image_url".to_string(),
        ));
    }

    let author_name = utils::author_or_default(body.author_name);
    let now = Utc::now();

    let inserted = sqlx::query(
        "INSERT INTO board_items (room_id, type, content, author_name, image_url, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&room_id)
    .bind(&body.r#type)
    .bind(&body.content)
    .bind(&author_name)
    .bind(&body.image_url)
    .bind(&now)
    .execute(&state.db)
    .await?;

    utils::touch_activity(&state, &room_id, now).await?;

    let item: BoardItem = sqlx::query_as("SELECT * FROM board_items WHERE id = ? LIMIT 1")
        .bind(inserted.last_insert_rowid())
        .fetch_one(&state.db)
        .await?;

    return Ok(Json(item));
}

async fn delete_item(
    Path((room_id, item_id)): Path<(String, i64)>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    // No existence check: deleting an absent item reports success.
    sqlx::query("DELETE FROM board_items WHERE id = ? AND room_id = ?")
        .bind(item_id)
        .bind(&room_id)
        .execute(&state.db)
        .await?;

    return Ok(Json(json!({ "success": true })));
}
