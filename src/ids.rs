use chrono::Utc;
use nanoid::nanoid;

/// Room-code alphabet, skipping lookalike characters (0/O, 1/I).
pub const ROOM_CODE_ALPHABET: [char; 32] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z', '2', '3', '4', '5', '6', '7', '8', '9',
];

pub const ROOM_CODE_LEN: usize = 6;

pub fn room_code() -> String {
    return nanoid!(ROOM_CODE_LEN, &ROOM_CODE_ALPHABET);
}

/// Storage key for an uploaded image, scoped under the room so keys from
/// different rooms can never collide with each other.
pub fn image_key(room_id: &str, filename: &str) -> String {
    let ext = filename.rsplit('.').next().unwrap_or("");
    let ext = if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        ext
    } else {
        "bin"
    };

    return format!(
        "{room_id}/{}-{}.{ext}",
        Utc::now().timestamp_millis(),
        nanoid!(7)
    );
}
