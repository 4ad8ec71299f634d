use super::utils;

use crate::{models::ChatMessage, prelude::*};

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
        "/api/rooms/:room_id/chat",
        get(list_messages).post(send_message),
    );
}

async fn list_messages(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let messages: Vec<ChatMessage> = sqlx::query_as(
        "SELECT * FROM chat_messages WHERE room_id = ? ORDER BY created_at ASC, id ASC",
    )
    .bind(&room_id)
    .fetch_all(&state.db)
    .await?;

    return Ok(Json(json!({ "messages": messages })));
}

#[derive(Debug, Deserialize)]
struct SendMessage {
    author_name: Option<String>,
    message: String,
}

async fn send_message(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<SendMessage>,
) -> Result<impl IntoResponse> {
    let author_name = utils::author_or_default(body.author_name);
    let now = Utc::now();

    let inserted = sqlx::query(
        "INSERT INTO chat_messages (room_id, author_name, message, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&room_id)
    .bind(&author_name)
    .bind(&body.message)
    .bind(&now)
    .execute(&state.db)
    .await?;

    utils::touch_activity(&state, &room_id, now).await?;

    let message: ChatMessage = sqlx::query_as("SELECT * FROM chat_messages WHERE id = ? LIMIT 1")
        .bind(inserted.last_insert_rowid())
        .fetch_one(&state.db)
        .await?;

    return Ok(Json(message));
}
