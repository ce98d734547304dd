//! Read-only helpers over fetched room snapshots.

use crate::models::{Room, RoomStatus, RoomType};

/// Whether the user created the room and so holds start/advance/end rights.
#[must_use]
pub fn is_owner(room: &Room, user_id: i64) -> bool {
    room.created_by.id == user_id
}

/// Whether the user appears in the room's player list.
#[must_use]
pub fn is_participant(room: &Room, user_id: i64) -> bool {
    room.players.iter().any(|p| p.player.id == user_id)
}

/// Whether the user may join: not already in, joinable, and still waiting.
#[must_use]
pub fn can_join(room: &Room, user_id: i64) -> bool {
    !is_participant(room, user_id) && room.can_join && room.status == RoomStatus::Waiting
}

#[must_use]
pub const fn status_text(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Waiting => "waiting",
        RoomStatus::InProgress => "in progress",
        RoomStatus::Finished => "finished",
        RoomStatus::Unknown => "unknown",
    }
}

#[must_use]
pub const fn type_text(room_type: RoomType) -> &'static str {
    match room_type {
        RoomType::Online => "online",
        RoomType::Offline => "in person",
    }
}

/// Aggregate statistics derived from a fetched room list.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomStats {
    pub total_rooms: usize,
    pub active_rooms: usize,
    pub completed_rooms: usize,
    /// Rounded to one decimal place.
    pub average_players_per_room: f64,
}

impl RoomStats {
    #[must_use]
    pub fn from_rooms(rooms: &[Room]) -> Self {
        let total_rooms = rooms.len();
        let active_rooms = rooms
            .iter()
            .filter(|r| r.status == RoomStatus::InProgress)
            .count();
        let completed_rooms = rooms
            .iter()
            .filter(|r| r.status == RoomStatus::Finished)
            .count();
        let average_players_per_room = if total_rooms == 0 {
            0.0
        } else {
            let players: i32 = rooms.iter().map(|r| r.current_player_count).sum();
            #[allow(clippy::cast_precision_loss)]
            let avg = f64::from(players) / total_rooms as f64;
            (avg * 10.0).round() / 10.0
        };
        Self {
            total_rooms,
            active_rooms,
            completed_rooms,
            average_players_per_room,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, RoomPlayer};
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

    fn room(id: i64, owner: i64, status: RoomStatus, player_count: i32) -> Room {
        Room {
            id,
            name: format!("room {id}"),
            description: String::new(),
            max_players: 10,
            movies_per_player: 2,
            scenes_per_movie: 5,
            status,
            room_type: RoomType::Online,
            created_at: Utc::now(),
            started_at: None,
            finished_at: None,
            room_code: "ABC234".to_string(),
            is_private: false,
            created_by: player(owner),
            players: vec![RoomPlayer {
                id: 1,
                player: player(owner),
                joined_at: Utc::now(),
                is_ready: false,
                has_submitted_movies: false,
            }],
            current_player_count: player_count,
            can_join: true,
        }
    }

    #[test]
    fn test_ownership_and_participation() {
        let r = room(1, 7, RoomStatus::Waiting, 1);
        assert!(is_owner(&r, 7));
        assert!(!is_owner(&r, 8));
        assert!(is_participant(&r, 7));
        assert!(!is_participant(&r, 8));
    }

    #[test]
    fn test_can_join_requires_waiting_non_participant() {
        let r = room(1, 7, RoomStatus::Waiting, 1);
        assert!(can_join(&r, 8));
        assert!(!can_join(&r, 7)); // already in

        let started = room(2, 7, RoomStatus::InProgress, 1);
        assert!(!can_join(&started, 8));
    }

    #[test]
    fn test_room_stats_aggregates() {
        let rooms = vec![
            room(1, 1, RoomStatus::Waiting, 2),
            room(2, 1, RoomStatus::InProgress, 4),
            room(3, 1, RoomStatus::Finished, 3),
        ];
        let stats = RoomStats::from_rooms(&rooms);
        assert_eq!(stats.total_rooms, 3);
        assert_eq!(stats.active_rooms, 1);
        assert_eq!(stats.completed_rooms, 1);
        assert!((stats.average_players_per_room - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_room_stats_empty_list() {
        let stats = RoomStats::from_rooms(&[]);
        assert_eq!(stats.total_rooms, 0);
        assert!((stats.average_players_per_room - 0.0).abs() < f64::EPSILON);
    }
}
