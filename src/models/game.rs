use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Movie, Scene};

/// Live game status as reported by the server.
///
/// The client never computes transitions itself; it renders whichever status
/// the latest snapshot carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Waiting,
    Playing,
    Finished,
    #[serde(other)]
    Unknown,
}

/// One game session attached to a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: i64,
    pub room_id: i64,
    #[serde(default)]
    pub current_movie_id: Option<i64>,
    #[serde(default)]
    pub current_scene_index: i32,
    #[serde(default)]
    pub current_player_turn: Option<i64>,
    pub status: SessionStatus,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

/// One guess event, correct or not, possibly a skip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameGuess {
    pub id: i64,
    pub player_id: i64,
    #[serde(default)]
    pub player_name: Option<String>,
    pub movie_id: i64,
    pub scene_index: i32,
    #[serde(default)]
    pub guess: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub is_skip: bool,
    #[serde(default)]
    pub guessed_at: Option<DateTime<Utc>>,
}

/// Per-player aggregate score, recomputed server-side on every fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    pub player_id: i64,
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub correct_guesses: i32,
    #[serde(default)]
    pub total_guesses: i32,
    #[serde(default)]
    pub points: i32,
}

/// Composite snapshot of a room's live game, the sole unit of truth the game
/// view renders. Replaced wholesale on every poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub session: GameSession,
    #[serde(default)]
    pub current_movie: Option<Movie>,
    #[serde(default)]
    pub current_scene: Option<Scene>,
    #[serde(default)]
    pub player_guesses: Vec<GameGuess>,
    #[serde(default)]
    pub scores: Vec<GameScore>,
    #[serde(default)]
    pub is_my_turn: bool,
    #[serde(default)]
    pub can_guess: bool,
    #[serde(default)]
    pub has_guessed_current_scene: bool,
}

impl GameState {
    /// Guesses made against the currently shown scene of the current movie.
    #[must_use]
    pub fn current_scene_guesses(&self) -> Vec<&GameGuess> {
        let Some(movie) = &self.current_movie else {
            return Vec::new();
        };
        self.player_guesses
            .iter()
            .filter(|g| g.movie_id == movie.id && g.scene_index == self.session.current_scene_index)
            .collect()
    }

    /// Whether every scored player has guessed the current scene.
    #[must_use]
    pub fn all_players_guessed(&self) -> bool {
        !self.scores.is_empty() && self.current_scene_guesses().len() == self.scores.len()
    }
}

/// POST /Game/guess request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessData {
    pub game_session_id: i64,
    pub movie_id: i64,
    pub scene_index: i32,
    pub guess: String,
    pub is_skip: bool,
}

/// POST /Game/assign-point request body (offline mode).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPointData {
    pub game_session_id: i64,
    pub player_id: i64,
    pub movie_id: i64,
    pub points: i32,
}
