//! Game view: waiting, in-progress and finished panels.
//!
//! The panel choice is keyed purely off the server-reported status; the
//! client never computes transitions itself.

use crate::models::{GameScore, GameState, Room, RoomStatus, RoomType, SessionStatus};
use crate::utils::room::is_owner;

/// Render the game screen for the latest snapshot.
///
/// `state` is `None` while the first fetch is pending or after a failed
/// poll; that renders the same pre-game panel as a `waiting` session.
#[must_use]
pub fn render(room: &Room, state: Option<&GameState>, current_user_id: i64) -> String {
    match state {
        None => render_waiting(room, current_user_id),
        Some(state) => match state.session.status {
            SessionStatus::Waiting | SessionStatus::Unknown => {
                render_waiting(room, current_user_id)
            }
            SessionStatus::Finished => render_finished(state),
            SessionStatus::Playing => render_playing(room, state, current_user_id),
        },
    }
}

/// Whether the start control is offered: owner only, and only while the
/// room itself is still waiting.
#[must_use]
pub fn can_start_game(room: &Room, current_user_id: i64) -> bool {
    is_owner(room, current_user_id) && room.status == RoomStatus::Waiting
}

fn render_waiting(room: &Room, current_user_id: i64) -> String {
    let mut out = String::from("Game not started\n");
    if can_start_game(room, current_user_id) {
        out.push_str("You can start the game when ready: run `game start`.\n");
    } else {
        out.push_str("Waiting for the room owner to start the game.\n");
    }
    out
}

fn render_finished(state: &GameState) -> String {
    let mut out = String::from("Game finished!\n\nFinal scores:\n");
    for (index, score) in sorted_scores(&state.scores).iter().enumerate() {
        let marker = if index == 0 {
            "🏆 winner".to_string()
        } else {
            format!("{}.", index + 1)
        };
        out.push_str(&format!(
            "  {marker} {} - {} points ({}/{} correct)\n",
            score.player_name, score.points, score.correct_guesses, score.total_guesses
        ));
    }
    out
}

fn render_playing(room: &Room, state: &GameState, current_user_id: i64) -> String {
    let mut out = String::new();
    let owner = is_owner(room, current_user_id);

    if let Some(movie) = &state.current_movie {
        out.push_str(&format!(
            "{} ({}) - scene {} of {}\n",
            movie.title,
            movie.year,
            state.session.current_scene_index + 1,
            movie.scenes.len()
        ));
    }
    if let Some(scene) = &state.current_scene {
        out.push_str(&format!("Image: {}\n", scene.image_url));
        if !scene.description.is_empty() {
            out.push_str(&format!("{}\n", scene.description));
        }
    }

    let current = state.current_scene_guesses();
    if !current.is_empty() {
        out.push_str("\nGuesses this scene:\n");
        for guess in &current {
            let name = guess
                .player_name
                .clone()
                .unwrap_or_else(|| format!("player {}", guess.player_id));
            let verdict = if guess.is_skip {
                "skipped".to_string()
            } else if guess.is_correct {
                format!("\"{}\" ✔", guess.guess)
            } else {
                format!("\"{}\" ✘", guess.guess)
            };
            out.push_str(&format!("  {name}: {verdict}\n"));
        }
    }

    out.push('\n');
    if room.room_type == RoomType::Online {
        if state.has_guessed_current_scene {
            out.push_str("You already guessed this scene. Waiting for the other players...\n");
        } else if state.can_guess {
            out.push_str("What's the movie? Run `game guess <title>` or `game skip`.\n");
        } else {
            out.push_str("Waiting for your turn...\n");
        }
        if owner && state.all_players_guessed() {
            out.push_str("All players have guessed. Run `game next` to advance.\n");
        }
    } else if owner {
        out.push_str("In-person mode. Show the scene, then award with `game point <player-id>`:\n");
        for score in &state.scores {
            out.push_str(&format!(
                "  [{}] {} - {} points\n",
                score.player_id, score.player_name, score.points
            ));
        }
        out.push_str("Advance with `game next`, finish with `game end`.\n");
    } else {
        out.push_str("In-person mode. The room owner controls the game.\n");
    }
    out
}

/// Scores ordered descending by points; ties keep the server's order.
#[must_use]
pub fn sorted_scores(scores: &[GameScore]) -> Vec<GameScore> {
    let mut sorted = scores.to_vec();
    sorted.sort_by_key(|s| std::cmp::Reverse(s.points));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameGuess, GameSession, Movie, Player, Scene};
    use chrono::Utc;

    fn player(id: i64) -> Player {
        Player {
            id,
            username: format!("player{id}"),
            email: format!("player{id}@example.com"),
            created_at: Utc::now(),
            last_login_at: None,
            is_active: true,
        }
    }

    fn room(owner_id: i64, status: RoomStatus, room_type: RoomType) -> Room {
        Room {
            id: 1,
            name: "movie night".to_string(),
            description: String::new(),
            max_players: 6,
            movies_per_player: 2,
            scenes_per_movie: 3,
            status,
            room_type,
            created_at: Utc::now(),
            started_at: None,
            finished_at: None,
            room_code: "ABC234".to_string(),
            is_private: false,
            created_by: player(owner_id),
            players: Vec::new(),
            current_player_count: 2,
            can_join: false,
        }
    }

    fn score(player_id: i64, points: i32) -> GameScore {
        GameScore {
            player_id,
            player_name: format!("player{player_id}"),
            correct_guesses: points,
            total_guesses: 5,
            points,
        }
    }

    fn state(status: SessionStatus, scores: Vec<GameScore>) -> GameState {
        GameState {
            session: GameSession {
                id: 1,
                room_id: 1,
                current_movie_id: Some(7),
                current_scene_index: 0,
                current_player_turn: None,
                status,
                started_at: None,
                finished_at: None,
            },
            current_movie: Some(Movie {
                id: 7,
                title: "Vertigo".to_string(),
                year: 1958,
                genre: "Thriller".to_string(),
                submitted_at: None,
                submitted_by: None,
                room_id: 1,
                scenes: vec![Scene {
                    id: 70,
                    movie_id: 7,
                    image_url: "http://cdn.example/70.png".to_string(),
                    order: 1,
                    description: "rooftop".to_string(),
                    uploaded_at: None,
                }],
                has_all_scenes: true,
            }),
            current_scene: None,
            player_guesses: Vec::new(),
            scores,
            is_my_turn: true,
            can_guess: true,
            has_guessed_current_scene: false,
        }
    }

    #[test]
    fn test_waiting_panel_offers_start_to_owner_only() {
        let r = room(1, RoomStatus::Waiting, RoomType::Online);
        let s = state(SessionStatus::Waiting, Vec::new());

        let as_owner = render(&r, Some(&s), 1);
        assert!(as_owner.contains("You can start the game"));

        let as_guest = render(&r, Some(&s), 2);
        assert!(as_guest.contains("Waiting for the room owner"));
        assert!(!as_guest.contains("You can start the game"));
    }

    #[test]
    fn test_no_start_once_room_left_waiting() {
        let r = room(1, RoomStatus::InProgress, RoomType::Online);
        assert!(!can_start_game(&r, 1));
    }

    #[test]
    fn test_missing_state_renders_pregame_panel() {
        let r = room(1, RoomStatus::Waiting, RoomType::Online);
        let out = render(&r, None, 1);
        assert!(out.contains("Game not started"));
    }

    #[test]
    fn test_finished_panel_sorts_scores_and_marks_winner() {
        let r = room(1, RoomStatus::Finished, RoomType::Online);
        let s = state(SessionStatus::Finished, vec![score(1, 3), score(2, 5)]);
        let out = render(&r, Some(&s), 1);

        let winner_pos = out.find("player2").unwrap_or(usize::MAX);
        let runner_pos = out.find("player1").unwrap_or(usize::MAX);
        assert!(winner_pos < runner_pos, "player2 should be listed first");
        assert!(out.contains("🏆 winner player2 - 5 points"));
        assert!(out.contains("2. player1 - 3 points"));
    }

    #[test]
    fn test_playing_panel_gates_guess_prompt() {
        let r = room(1, RoomStatus::InProgress, RoomType::Online);

        let mut s = state(SessionStatus::Playing, vec![score(1, 0), score(2, 0)]);
        let out = render(&r, Some(&s), 2);
        assert!(out.contains("What's the movie?"));
        assert!(out.contains("Vertigo (1958) - scene 1 of 1"));

        s.has_guessed_current_scene = true;
        let out = render(&r, Some(&s), 2);
        assert!(out.contains("You already guessed this scene"));
        assert!(!out.contains("What's the movie?"));
    }

    #[test]
    fn test_offline_panel_lists_point_buttons_for_owner() {
        let r = room(1, RoomStatus::InProgress, RoomType::Offline);
        let s = state(SessionStatus::Playing, vec![score(1, 2), score(2, 1)]);

        let as_owner = render(&r, Some(&s), 1);
        assert!(as_owner.contains("[1] player1 - 2 points"));
        assert!(as_owner.contains("[2] player2 - 1 points"));

        let as_guest = render(&r, Some(&s), 2);
        assert!(as_guest.contains("The room owner controls the game"));
        assert!(!as_guest.contains("[1] player1"));
    }

    #[test]
    fn test_next_scene_hint_once_all_guessed() {
        let r = room(1, RoomStatus::InProgress, RoomType::Online);
        let mut s = state(SessionStatus::Playing, vec![score(1, 0)]);
        s.player_guesses = vec![GameGuess {
            id: 1,
            player_id: 1,
            player_name: Some("player1".to_string()),
            movie_id: 7,
            scene_index: 0,
            guess: "Psycho".to_string(),
            is_correct: false,
            is_skip: false,
            guessed_at: None,
        }];
        let out = render(&r, Some(&s), 1);
        assert!(out.contains("All players have guessed"));
        assert!(out.contains("player1: \"Psycho\" ✘"));
    }

    #[test]
    fn test_rerender_same_snapshot_is_identical() {
        let r = room(1, RoomStatus::InProgress, RoomType::Online);
        let s = state(SessionStatus::Playing, vec![score(1, 0)]);
        assert_eq!(render(&r, Some(&s), 1), render(&r, Some(&s), 1));
    }
}
