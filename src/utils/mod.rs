pub mod room;
pub mod room_code;

pub use room::RoomStats;
