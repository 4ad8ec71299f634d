use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct ChatMessage {
    pub id: i64,
    pub room_id: String,

    pub author_name: String,
    pub message: String,

    pub created_at: DateTime<Utc>,
}
