//! Room lifecycle endpoints.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{CreateRoomData, JoinRoomBody, Room};

/// Dedicated endpoint listing only the caller's rooms.
pub const MY_ROOMS_PATH: &str = "/Rooms/my-rooms";

impl ApiClient {
    /// List the rooms the current user participates in, falling back to the
    /// full room list when the dedicated endpoint fails.
    pub async fn my_rooms(&self) -> Result<Vec<Room>, ApiError> {
        match self.get::<Vec<Room>>(MY_ROOMS_PATH).await {
            Ok(rooms) => Ok(rooms),
            Err(err) => {
                tracing::warn!(error = %err, "my-rooms endpoint failed, falling back to /Rooms");
                self.list_rooms().await
            }
        }
    }

    /// List all visible rooms.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.get("/Rooms").await
    }

    pub async fn create_room(&self, data: &CreateRoomData) -> Result<Room, ApiError> {
        self.post("/Rooms", data).await
    }

    /// Join a room by id. A room code is attached only when joining a
    /// private room through its access code.
    pub async fn join_room(&self, room_id: i64, room_code: Option<&str>) -> Result<(), ApiError> {
        let body = JoinRoomBody {
            room_code: room_code.map(str::to_string),
        };
        self.post_unit_with(&format!("/Rooms/{room_id}/join"), &body)
            .await
    }

    pub async fn leave_room(&self, room_id: i64) -> Result<(), ApiError> {
        self.post_unit(&format!("/Rooms/{room_id}/leave")).await
    }

    pub async fn room_details(&self, room_id: i64) -> Result<Room, ApiError> {
        self.get(&format!("/Rooms/{room_id}")).await
    }

    /// Resolve a room code by fetching all rooms and scanning for a match.
    ///
    /// A linear scan with no pagination awareness; the backend exposes no
    /// code-lookup endpoint.
    pub async fn find_room_by_code(&self, code: &str) -> Result<Option<Room>, ApiError> {
        let rooms = self.list_rooms().await?;
        Ok(rooms.into_iter().find(|room| room.room_code == code))
    }
}
