//! Avatar fallback derivations.
//!
//! When a participant or conversation has no picture the host draws a
//! colored circle with initials. Both the initials and the palette slot are
//! derived here so every surface (inbox row, chat header, member list)
//! agrees on them.

/// Number of slots in the host's avatar color palette.
pub const AVATAR_COLOR_SLOTS: usize = 7;

/// Initials shown on a fallback avatar.
///
/// First character of each of the first two whitespace-separated words,
/// uppercased. Names with a single word contribute their first two
/// characters instead, and an all-whitespace name falls back to "?".
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    match (words.next(), words.next()) {
        (Some(first), Some(second)) => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect(),
        (Some(only), None) => only.chars().take(2).flat_map(char::to_uppercase).collect(),
        (None, _) => "?".to_string(),
    }
}

/// Deterministic palette slot for a name, always below
/// [`AVATAR_COLOR_SLOTS`]. Derived from the first character so a name keeps
/// its color across surfaces and sessions.
pub fn avatar_color_index(name: &str) -> usize {
    match name.chars().next() {
        Some(c) => c as usize % AVATAR_COLOR_SLOTS,
        None => 0,
    }
}
