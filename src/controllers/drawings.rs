use super::utils;

use crate::{models::Drawing, prelude::*};

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    return router.route(
        "/api/rooms/:room_id/drawings",
        get(latest_drawing).post(save_drawing),
    );
}

/// Latest-revision-wins: at most one snapshot is ever returned, and older
/// ones are never read again.
async fn latest_drawing(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let drawings: Vec<Drawing> = sqlx::query_as(
        "SELECT * FROM drawings WHERE room_id = ? ORDER BY created_at DESC, id DESC LIMIT 1",
    )
    .bind(&room_id)
    .fetch_all(&state.db)
    .await?;

    return Ok(Json(json!({ "drawings": drawings })));
}

#[derive(Debug, Deserialize)]
struct SaveDrawing {
    drawing_data: String,
    author_name: Option<String>,
}

async fn save_drawing(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<SaveDrawing>,
) -> Result<impl IntoResponse> {
    let author_name = utils::author_or_default(body.author_name);

    // Every save is a brand-new snapshot, never an update of a prior row.
    let inserted = sqlx::query(
        "INSERT INTO drawings (room_id, drawing_data, author_name, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&room_id)
    .bind(&body.drawing_data)
    .bind(&author_name)
    .bind(Utc::now())
    .execute(&state.db)
    .await?;

    let drawing: Drawing = sqlx::query_as("SELECT * FROM drawings WHERE id = ? LIMIT 1")
        .bind(inserted.last_insert_rowid())
        .fetch_one(&state.db)
        .await?;

    return Ok(Json(drawing));
}
