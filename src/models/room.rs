use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Room {
    pub id: String,

    pub name: String,
    pub creator_name: String,

    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct RoomSettings {
    pub room_id: String,

    pub password: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl RoomSettings {
    /// A room stays active until it is explicitly disabled or its expiry
    /// passes.
    pub fn active_at(&self, now: DateTime<Utc>) -> bool {
        if !self.is_active {
            return false;
        }

        return match self.expires_at {
            Some(expires_at) => expires_at > now,
            None => true,
        };
    }
}

/// Room fields plus the flags derived from its settings row.
#[derive(Serialize, Debug, Clone)]
pub struct RoomInfo {
    #[serde(flatten)]
    pub room: Room,

    pub has_password: bool,
    pub is_active: bool,
}
