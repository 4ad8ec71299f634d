use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use chrono::{DateTime, Utc};
use sqlx;

use crate::{models::Room, prelude::*};

pub const DEFAULT_AUTHOR: &str = "anonymous";

pub async fn find_room(state: &AppState, room_id: &str) -> Result<Option<Room>> {
    let room: Option<Room> = sqlx::query_as("SELECT * FROM rooms WHERE id = ? LIMIT 1")
        .bind(room_id)
        .fetch_optional(&state.db)
        .await?;

    return Ok(room);
}

pub fn author_or_default(author_name: Option<String>) -> String {
    return match author_name.as_deref().map(str::trim) {
        Some(author_name) if !author_name.is_empty() => author_name.to_string(),
        _ => DEFAULT_AUTHOR.to_string(),
    };
}

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| anyhow::anyhow!("failed to hash password: {err}"))?
        .to_string();

    return Ok(hash);
}

/// Access gate. A room with no settings row or a null password is open to
/// everyone, including rooms that do not exist at all; callers that care
/// about existence must check it separately.
pub async fn password_valid(
    state: &AppState,
    room_id: &str,
    candidate: Option<&str>,
) -> Result<bool> {
    let stored: Option<Option<String>> =
        sqlx::query_scalar("SELECT password FROM room_settings WHERE room_id = ? LIMIT 1")
            .bind(room_id)
            .fetch_optional(&state.db)
            .await?;

    let Some(Some(stored)) = stored else {
        return Ok(true);
    };

    let Some(candidate) = candidate else {
        return Ok(false);
    };

    let hash = PasswordHash::new(&stored)
        .map_err(|err| anyhow::anyhow!("stored password hash is unreadable: {err}"))?;

    return Ok(Argon2::default()
        .verify_password(candidate.as_bytes(), &hash)
        .is_ok());
}

/// Bumps the room's activity stamp. Runs as its own statement after a
/// content insert; the two are not atomic and a stale stamp is acceptable.
pub async fn touch_activity(state: &AppState, room_id: &str, now: DateTime<Utc>) -> Result<()> {
    sqlx::query("UPDATE rooms SET last_activity = ? WHERE id = ?")
        .bind(now)
        .bind(room_id)
        .execute(&state.db)
        .await?;

    return Ok(());
}
