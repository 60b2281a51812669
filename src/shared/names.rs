pub const MAX_PLAYER_NAME_LENGTH: usize = 20;

/// Collapses whitespace runs, strips control characters and caps the result
/// at `MAX_PLAYER_NAME_LENGTH` characters.
pub fn sanitize_player_name(name: &str, fallback: &str) -> String {
    let cleaned = name
        .split_whitespace()
        .map(|word| word.chars().filter(|ch| !ch.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if cleaned.is_empty() {
        return fallback.to_string();
    }
    let capped: String = cleaned.chars().take(MAX_PLAYER_NAME_LENGTH).collect();
    capped.trim_end().to_string()
}

/// Bots are numbered from 1 in creation order.
pub fn bot_name(number: usize) -> String {
    format!("Enemy{number}")
}
