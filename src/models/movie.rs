use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Player;

/// A submitted movie together with its ordered scene clues.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub genre: String,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submitted_by: Option<Player>,
    pub room_id: i64,
    #[serde(default)]
    pub scenes: Vec<Scene>,
    /// Derived server-side from the scene count; never computed locally.
    #[serde(default)]
    pub has_all_scenes: bool,
}

/// One ordered image clue belonging to a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: i64,
    pub movie_id: i64,
    pub image_url: String,
    /// 1-based position within the movie.
    pub order: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// POST /Game/rooms/{roomId}/movies request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieData {
    pub title: String,
    pub year: i32,
    pub genre: String,
}

/// GET /Game/rooms/{roomId}/my-movies response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyMoviesResponse {
    #[serde(default)]
    pub player_id: i64,
    #[serde(default)]
    pub room_id: i64,
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub instruction: String,
}

/// DELETE /Game/scenes/{id} request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSceneData {
    pub scene_id: i64,
}

/// One entry of a reorder request: a scene and its new 1-based position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneOrder {
    pub scene_id: i64,
    pub new_order: i32,
}

/// PUT /Game/scenes/reorder request body carrying the full mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderScenesData {
    pub movie_id: i64,
    pub scene_orders: Vec<SceneOrder>,
}
