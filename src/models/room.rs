use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Player;

/// Room lifecycle status, encoded as an integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum RoomStatus {
    Waiting,
    InProgress,
    Finished,
    Unknown,
}

impl From<i32> for RoomStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Waiting,
            1 => Self::InProgress,
            2 => Self::Finished,
            _ => Self::Unknown,
        }
    }
}

impl From<RoomStatus> for i32 {
    fn from(status: RoomStatus) -> Self {
        match status {
            RoomStatus::Waiting => 0,
            RoomStatus::InProgress => 1,
            RoomStatus::Finished => 2,
            RoomStatus::Unknown => -1,
        }
    }
}

/// Play mode: digital guess submission vs. in-person facilitated scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum RoomType {
    Online,
    Offline,
}

impl From<i32> for RoomType {
    fn from(value: i32) -> Self {
        if value == 1 { Self::Offline } else { Self::Online }
    }
}

impl From<RoomType> for i32 {
    fn from(room_type: RoomType) -> Self {
        match room_type {
            RoomType::Online => 0,
            RoomType::Offline => 1,
        }
    }
}

/// Join record linking a player to a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPlayer {
    pub id: i64,
    pub player: Player,
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub is_ready: bool,
    #[serde(default)]
    pub has_submitted_movies: bool,
}

/// A game lobby grouping players, movies and one game session.
///
/// Lifecycle is owned entirely by the server; the client only reads and
/// displays it and sends mutation requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub max_players: i32,
    pub movies_per_player: i32,
    pub scenes_per_movie: i32,
    pub status: RoomStatus,
    #[serde(rename = "type", default = "default_room_type")]
    pub room_type: RoomType,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
    pub room_code: String,
    #[serde(default)]
    pub is_private: bool,
    pub created_by: Player,
    #[serde(default)]
    pub players: Vec<RoomPlayer>,
    #[serde(default)]
    pub current_player_count: i32,
    #[serde(default)]
    pub can_join: bool,
}

const fn default_room_type() -> RoomType {
    RoomType::Online
}

/// POST /Rooms request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomData {
    pub name: String,
    pub description: String,
    pub max_players: i32,
    pub movies_per_player: i32,
    pub scenes_per_movie: i32,
    pub is_private: bool,
}

/// POST /Rooms/{id}/join request body; the code is only sent when joining a
/// private room through its access code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_code: Option<String>,
}
