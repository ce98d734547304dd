//! Client-side form validation.
//!
//! Everything here runs before any network call; a failing form never
//! reaches the gateway.

use std::path::Path;

use chrono::{Datelike, Utc};

use crate::error::ValidationErrors;
use crate::models::{CreateMovieData, CreateRoomData, Movie};
use crate::utils::room_code;

pub const MIN_ROOM_PLAYERS: i32 = 2;
pub const MAX_ROOM_PLAYERS: i32 = 10;
pub const MIN_MOVIE_YEAR: i32 = 1900;
/// Maximum scene image size accepted for upload.
pub const MAX_SCENE_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Validate a room-creation form field by field.
///
/// # Errors
///
/// Returns per-field messages for a missing name/description, a player
/// count outside [2, 10], or non-positive movie/scene counts.
pub fn validate_create_room(data: &CreateRoomData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if data.name.trim().is_empty() {
        errors.add("name", "name is required");
    }
    if data.description.trim().is_empty() {
        errors.add("description", "description is required");
    }
    if data.max_players < MIN_ROOM_PLAYERS {
        errors.add("maxPlayers", "at least 2 players");
    }
    if data.max_players > MAX_ROOM_PLAYERS {
        errors.add("maxPlayers", "at most 10 players");
    }
    if data.movies_per_player < 1 {
        errors.add("moviesPerPlayer", "at least 1 movie per player");
    }
    if data.scenes_per_movie < 1 {
        errors.add("scenesPerMovie", "at least 1 scene per movie");
    }
    errors.into_result()
}

/// Normalize a join code to uppercase and require exactly 6 alphanumeric
/// characters.
///
/// # Errors
///
/// Returns a `roomCode` field error for any non-conforming input.
pub fn normalize_join_code(input: &str) -> Result<String, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let code = room_code::normalize(input);
    if code.is_empty() {
        errors.add("roomCode", "room code is required");
        return Err(errors);
    }
    if !room_code::is_valid(&code) {
        errors.add("roomCode", "code must be exactly 6 letters and digits");
        return Err(errors);
    }
    Ok(code)
}

/// Validate a movie submission form.
///
/// # Errors
///
/// Returns per-field messages for an empty title/genre or a year outside
/// [1900, current year + 5].
pub fn validate_movie(data: &CreateMovieData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let max_year = Utc::now().year() + 5;
    if data.title.trim().is_empty() {
        errors.add("title", "title is required");
    }
    if data.year < MIN_MOVIE_YEAR || data.year > max_year {
        errors.add("year", format!("year must be between 1900 and {max_year}"));
    }
    if data.genre.trim().is_empty() {
        errors.add("genre", "genre is required");
    }
    errors.into_result()
}

/// Whether the player has already submitted their quota of movies for the
/// room.
#[must_use]
pub fn movie_quota_reached(movies: &[Movie], movies_per_player: i32) -> bool {
    movies_per_player > 0 && movies.len() >= movies_per_player.unsigned_abs() as usize
}

/// Image MIME type inferred from the file extension, for the formats the
/// upload form accepts.
#[must_use]
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Validate a scene upload form: an image file no larger than 5 MB plus a
/// description. Returns the MIME type to send with the multipart part.
///
/// # Errors
///
/// Returns `file`/`description` field errors; nothing is uploaded when any
/// check fails.
pub fn validate_scene_upload(
    path: &Path,
    size_bytes: u64,
    description: &str,
) -> Result<&'static str, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if description.trim().is_empty() {
        errors.add("description", "description is required");
    }
    if size_bytes > MAX_SCENE_IMAGE_BYTES {
        errors.add("file", "file must be at most 5MB");
    }
    match image_mime(path) {
        Some(mime) => {
            errors.into_result()?;
            Ok(mime)
        }
        None => {
            errors.add("file", "only image files are allowed");
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn room_form() -> CreateRoomData {
        CreateRoomData {
            name: "Friday night".to_string(),
            description: "Movies with friends".to_string(),
            max_players: 4,
            movies_per_player: 4,
            scenes_per_movie: 10,
            is_private: false,
        }
    }

    #[test]
    fn test_valid_room_form_passes() {
        assert!(validate_create_room(&room_form()).is_ok());
    }

    #[test]
    fn test_room_player_bounds_block_submission() {
        let mut form = room_form();
        form.max_players = 1;
        let Err(errors) = validate_create_room(&form) else {
            unreachable!("expected maxPlayers error");
        };
        assert_eq!(errors.get("maxPlayers"), Some("at least 2 players"));

        form.max_players = 11;
        let Err(errors) = validate_create_room(&form) else {
            unreachable!("expected maxPlayers error");
        };
        assert_eq!(errors.get("maxPlayers"), Some("at most 10 players"));
    }

    #[test]
    fn test_room_counts_must_be_positive() {
        let mut form = room_form();
        form.movies_per_player = 0;
        form.scenes_per_movie = 0;
        let Err(errors) = validate_create_room(&form) else {
            unreachable!("expected count errors");
        };
        assert!(errors.get("moviesPerPlayer").is_some());
        assert!(errors.get("scenesPerMovie").is_some());
    }

    #[test]
    fn test_join_code_normalized_to_uppercase() {
        assert_eq!(
            normalize_join_code("  ab12cd ").ok(),
            Some("AB12CD".to_string())
        );
    }

    #[test]
    fn test_join_code_rejects_wrong_length_or_symbols() {
        assert!(normalize_join_code("").is_err());
        assert!(normalize_join_code("ABC12").is_err());
        assert!(normalize_join_code("ABC1234").is_err());
        assert!(normalize_join_code("AB-12C").is_err());
    }

    #[test]
    fn test_movie_year_bounds() {
        let mut form = CreateMovieData {
            title: "Metropolis".to_string(),
            year: 1927,
            genre: "Sci-fi".to_string(),
        };
        assert!(validate_movie(&form).is_ok());

        form.year = 1899;
        assert!(validate_movie(&form).is_err());

        form.year = Utc::now().year() + 6;
        assert!(validate_movie(&form).is_err());
    }

    #[test]
    fn test_movie_required_fields() {
        let form = CreateMovieData {
            title: "  ".to_string(),
            year: 2000,
            genre: String::new(),
        };
        let Err(errors) = validate_movie(&form) else {
            unreachable!("expected field errors");
        };
        assert!(errors.get("title").is_some());
        assert!(errors.get("genre").is_some());
    }

    #[test]
    fn test_scene_upload_rejects_non_image() {
        let err = validate_scene_upload(&PathBuf::from("notes.txt"), 100, "opening shot");
        let Err(errors) = err else {
            unreachable!("expected file error");
        };
        assert_eq!(errors.get("file"), Some("only image files are allowed"));
    }

    #[test]
    fn test_scene_upload_rejects_oversized_file() {
        let err = validate_scene_upload(
            &PathBuf::from("still.png"),
            MAX_SCENE_IMAGE_BYTES + 1,
            "opening shot",
        );
        let Err(errors) = err else {
            unreachable!("expected size error");
        };
        assert_eq!(errors.get("file"), Some("file must be at most 5MB"));
    }

    #[test]
    fn test_scene_upload_accepts_image_at_limit() {
        let mime = validate_scene_upload(
            &PathBuf::from("still.JPG"),
            MAX_SCENE_IMAGE_BYTES,
            "opening shot",
        );
        assert_eq!(mime.ok(), Some("image/jpeg"));
    }
}
