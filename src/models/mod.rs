//! Plain records mirrored from the backend's JSON responses.
//!
//! The client never mutates these locally; every snapshot is replaced
//! wholesale after a re-fetch.

pub mod game;
pub mod movie;
pub mod player;
pub mod room;

pub use game::{
    AssignPointData, GameGuess, GameScore, GameSession, GameState, SessionStatus, SubmitGuessData,
};
pub use movie::{
    CreateMovieData, DeleteSceneData, Movie, MyMoviesResponse, ReorderScenesData, Scene, SceneOrder,
};
pub use player::{LoginResponse, Player};
pub use room::{CreateRoomData, JoinRoomBody, Room, RoomPlayer, RoomStatus, RoomType};
