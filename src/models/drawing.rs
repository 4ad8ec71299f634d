use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx;

/// One saved snapshot of the freehand canvas. `drawing_data` is an opaque
/// serialized stroke list; the server stores and returns it untouched.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Drawing {
    pub id: i64,
    pub room_id: String,

    pub drawing_data: String,
    pub author_name: String,

    pub created_at: DateTime<Utc>,
}
