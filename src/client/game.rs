//! Game endpoints: movies, scenes and the live game session.

use std::path::Path;

use reqwest::multipart::{Form, Part};

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    AssignPointData, CreateMovieData, DeleteSceneData, GameState, Movie, MyMoviesResponse,
    ReorderScenesData, SubmitGuessData,
};

impl ApiClient {
    /// List the current user's movies for a room, with the server's message
    /// and instruction lines.
    pub async fn my_movies(&self, room_id: i64) -> Result<MyMoviesResponse, ApiError> {
        self.get(&format!("/Game/rooms/{room_id}/my-movies")).await
    }

    pub async fn submit_movie(
        &self,
        room_id: i64,
        data: &CreateMovieData,
    ) -> Result<Movie, ApiError> {
        self.post(&format!("/Game/rooms/{room_id}/movies"), data)
            .await
    }

    /// Upload one scene image as multipart form data.
    ///
    /// `order` is a client-computed hint (`existing scene count + 1`); the
    /// server-confirmed order from the next re-fetch is authoritative.
    pub async fn upload_scene(
        &self,
        movie_id: i64,
        order: i32,
        description: &str,
        image_path: &Path,
        mime: &str,
    ) -> Result<(), ApiError> {
        let bytes = tokio::fs::read(image_path).await.map_err(|err| {
            ApiError::InvalidResponse(format!(
                "could not read image file {}: {err}",
                image_path.display()
            ))
        })?;
        let file_name = image_path
            .file_name()
            .map_or_else(|| "scene".to_string(), |n| n.to_string_lossy().into_owned());
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|err| ApiError::InvalidResponse(format!("invalid image mime type: {err}")))?;

        let form = Form::new()
            .text("movieId", movie_id.to_string())
            .text("order", order.to_string())
            .text("description", description.to_string())
            .part("imageFile", part);

        self.post_multipart("/Game/scenes", form).await
    }

    pub async fn delete_scene(&self, scene_id: i64) -> Result<(), ApiError> {
        let body = DeleteSceneData { scene_id };
        self.delete_unit(&format!("/Game/scenes/{scene_id}"), &body)
            .await
    }

    /// Send the full sceneId -> newOrder mapping for one movie.
    pub async fn reorder_scenes(&self, data: &ReorderScenesData) -> Result<(), ApiError> {
        self.put_unit("/Game/scenes/reorder", data).await
    }

    /// Fetch the composite game snapshot for a room. Polled every few
    /// seconds while the game screen is active.
    pub async fn game_state(&self, room_id: i64) -> Result<GameState, ApiError> {
        self.get(&format!("/Game/rooms/{room_id}/state")).await
    }

    pub async fn start_game(&self, room_id: i64) -> Result<(), ApiError> {
        self.post_unit(&format!("/Game/rooms/{room_id}/start"))
            .await
    }

    pub async fn submit_guess(&self, data: &SubmitGuessData) -> Result<(), ApiError> {
        self.post_unit_with("/Game/guess", data).await
    }

    pub async fn assign_point(&self, data: &AssignPointData) -> Result<(), ApiError> {
        self.post_unit_with("/Game/assign-point", data).await
    }

    pub async fn next_scene(&self, room_id: i64) -> Result<(), ApiError> {
        self.post_unit(&format!("/Game/rooms/{room_id}/next-scene"))
            .await
    }

    pub async fn end_game(&self, room_id: i64) -> Result<(), ApiError> {
        self.post_unit(&format!("/Game/rooms/{room_id}/end")).await
    }
}
