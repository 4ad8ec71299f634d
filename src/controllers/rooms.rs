use super::utils;

use crate::{
    ids,
    models::{RoomInfo, RoomSettings},
    prelude::*,
};

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    return router
        .route("/api/rooms", post(create_room))
        .route("/api/rooms/:room_id", get(get_room).delete(delete_room))
        .route("/api/rooms/:room_id/verify", post(verify_password));
}

const DEFAULT_ROOM_NAME: &str = "Untitled board";

/// Codes are drawn blind, so a fresh one can collide with an existing room.
const CREATE_ATTEMPTS: usize = 5;

#[derive(Debug, Deserialize)]
struct CreateRoom {
    name: Option<String>,
    creator_name: Option<String>,
    password: Option<String>,
}

async fn create_room(
    State(state): State<AppState>,
    Json(body): Json<CreateRoom>,
) -> Result<impl IntoResponse> {
    let name = match body.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_ROOM_NAME.to_string(),
    };
    let creator_name = utils::author_or_default(body.creator_name);
    let password = body
        .password
        .as_deref()
        .map(str::trim)
        .filter(|password| !password.is_empty());

    let now = Utc::now();

    let mut room_id = None;
    for _ in 0..CREATE_ATTEMPTS {
        let candidate = ids::room_code();

        let inserted = sqlx::query(
            "INSERT INTO rooms (id, name, creator_name, created_at, last_activity) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&candidate)
        .bind(&name)
        .bind(&creator_name)
        .bind(&now)
        .bind(&now)
        .execute(&state.db)
        .await;

        match inserted {
            Ok(_) => {
                room_id = Some(candidate);
                break;
            }
            Err(err)
                if err
                    .as_database_error()
                    .is_some_and(|err| err.is_unique_violation()) =>
            {
                continue;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let Some(room_id) = room_id else {
        return Err(anyhow::anyhow!(
            "no unique room code after {CREATE_ATTEMPTS} attempts"
        )
        .into());
    };

    if let Some(password) = password {
        let hash = utils::hash_password(password)?;

        sqlx::query("INSERT INTO room_settings (room_id, password) VALUES (?, ?)")
            .bind(&room_id)
            .bind(&hash)
            .execute(&state.db)
            .await?;
    }

    tracing::info!(%room_id, "created room");

    return Ok(Json(json!({
        "room_id": room_id,
        "name": name,
        "creator_name": creator_name,
        "has_password": password.is_some(),
    })));
}

async fn get_room(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let Some(room) = utils::find_room(&state, &room_id).await? else {
        return Err(AppError::NotFound("Room not found".to_string()));
    };

    let settings: Option<RoomSettings> =
        sqlx::query_as("SELECT * FROM room_settings WHERE room_id = ? LIMIT 1")
            .bind(&room_id)
            .fetch_optional(&state.db)
            .await?;

    let has_password = settings
        .as_ref()
        .is_some_and(|settings| settings.password.is_some());
    let is_active = match &settings {
        Some(settings) => settings.active_at(Utc::now()),
        None => true,
    };

    return Ok(Json(RoomInfo {
        room,
        has_password,
        is_active,
    }));
}

#[derive(Debug, Deserialize)]
struct VerifyPassword {
    password: Option<String>,
}

async fn verify_password(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<VerifyPassword>,
) -> Result<impl IntoResponse> {
    let valid = utils::password_valid(&state, &room_id, body.password.as_deref()).await?;

    return Ok(Json(json!({ "valid": valid })));
}

#[derive(Debug, Deserialize)]
struct DeleteRoom {
    password: Option<String>,
}

async fn delete_room(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
    body: Option<Json<DeleteRoom>>,
) -> Result<impl IntoResponse> {
    let password = match &body {
        Some(Json(body)) => body.password.as_deref(),
        None => None,
    };

    if !utils::password_valid(&state, &room_id, password).await? {
        return Err(AppError::Forbidden("Invalid password".to_string()));
    }

    // Cascades to settings, board items, chat messages and drawings.
    // Deleting a room that is already gone reports success.
    sqlx::query("DELETE FROM rooms WHERE id = ?")
        .bind(&room_id)
        .execute(&state.db)
        .await?;

    tracing::info!(%room_id, "deleted room");

    return Ok(Json(json!({ "success": true })));
}
