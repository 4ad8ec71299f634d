use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx;

pub const ITEM_TYPE_TEXT: &str = "text";
pub const ITEM_TYPE_URL: &str = "url";
pub const ITEM_TYPE_IMAGE: &str = "image";
pub const ITEM_TYPE_DRAWING: &str = "drawing";

pub const ITEM_TYPES: [&str; 4] = [
    ITEM_TYPE_TEXT,
    ITEM_TYPE_URL,
    ITEM_TYPE_IMAGE,
    ITEM_TYPE_DRAWING,
];

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct BoardItem {
    pub id: i64,
    pub room_id: String,

    #[sqlx(rename = "type")]
    pub r#type: String,
    pub content: String,
    pub author_name: String,
    pub image_url: Option<String>,

    pub created_at: DateTime<Utc>,
}
