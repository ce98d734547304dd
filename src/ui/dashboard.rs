//! Dashboard view: the user's room list plus derived statistics.

use crate::models::Room;
use crate::utils::RoomStats;
use crate::utils::room::{status_text, type_text};

/// Render the room list with the stats block on top.
#[must_use]
pub fn render(rooms: &[Room]) -> String {
    let stats = RoomStats::from_rooms(rooms);
    let mut out = String::new();

    out.push_str(&format!(
        "Rooms: {} total, {} active, {} finished, {:.1} players/room avg\n",
        stats.total_rooms,
        stats.active_rooms,
        stats.completed_rooms,
        stats.average_players_per_room
    ));

    if rooms.is_empty() {
        out.push_str("\nNo rooms yet. Create one or join with a code.\n");
        return out;
    }

    out.push('\n');
    for room in rooms {
        out.push_str(&render_room_line(room));
        out.push('\n');
    }
    out
}

fn render_room_line(room: &Room) -> String {
    let privacy = if room.is_private { ", private" } else { "" };
    format!(
        "#{} {} [{}] ({}, {}/{} players{}) code {}",
        room.id,
        room.name,
        status_text(room.status),
        type_text(room.room_type),
        room.current_player_count,
        room.max_players,
        privacy,
        room.room_code,
    )
}

/// Render one room in full, for the room details screen.
#[must_use]
pub fn render_details(room: &Room) -> String {
    let mut out = render_room_line(room);
    out.push('\n');
    if !room.description.is_empty() {
        out.push_str(&format!("{}\n", room.description));
    }
    out.push_str(&format!(
        "{} movies per player, {} scenes per movie, created by {}\n",
        room.movies_per_player, room.scenes_per_movie, room.created_by.username
    ));
    out.push_str("Players:\n");
    for rp in &room.players {
        let ready = if rp.is_ready { " (ready)" } else { "" };
        let submitted = if rp.has_submitted_movies {
            " [movies in]"
        } else {
            ""
        };
        out.push_str(&format!("  - {}{ready}{submitted}\n", rp.player.username));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, RoomStatus, RoomType};
    use chrono::Utc;

    fn room(id: i64, status: RoomStatus) -> Room {
        Room {
            id,
            name: format!("room {id}"),
            description: "a test room".to_string(),
            max_players: 6,
            movies_per_player: 2,
            scenes_per_movie: 5,
            status,
            room_type: RoomType::Online,
            created_at: Utc::now(),
            started_at: None,
            finished_at: None,
            room_code: "XK42QP".to_string(),
            is_private: false,
            created_by: Player {
                id: 1,
                username: "ana".to_string(),
                email: "ana@example.com".to_string(),
                created_at: Utc::now(),
                last_login_at: None,
                is_active: true,
            },
            players: Vec::new(),
            current_player_count: 3,
            can_join: true,
        }
    }

    #[test]
    fn test_dashboard_shows_stats_and_rooms() {
        let rooms = vec![room(1, RoomStatus::Waiting), room(2, RoomStatus::InProgress)];
        let out = render(&rooms);
        assert!(out.contains("2 total, 1 active, 0 finished"));
        assert!(out.contains("#1 room 1 [waiting]"));
        assert!(out.contains("#2 room 2 [in progress]"));
        assert!(out.contains("code XK42QP"));
    }

    #[test]
    fn test_empty_dashboard_prompts_to_create() {
        let out = render(&[]);
        assert!(out.contains("No rooms yet"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let rooms = vec![room(1, RoomStatus::Waiting)];
        assert_eq!(render(&rooms), render(&rooms));
    }
}
