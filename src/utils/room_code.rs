/// Room codes are 6 uppercase alphanumeric characters, assigned server-side
/// at room creation.
pub const ROOM_CODE_LENGTH: usize = 6;

/// Normalize user input for a room code (trimmed, uppercased).
#[must_use]
pub fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Validate room code format.
#[must_use]
pub fn is_valid(code: &str) -> bool {
    code.len() == ROOM_CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
