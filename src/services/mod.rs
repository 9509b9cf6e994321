//! Page-level behaviors: form validation, editor helpers and listing
//! filters. Each works on plain values so the pages stay thin.

pub mod auth;
pub mod editor;
pub mod listing;
pub mod search;

/// Whitespace as browsers match `\s` and `trim()`: Unicode `White_Space`
/// without U+0085, plus U+FEFF.
pub fn is_space(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{85}' && c.is_whitespace())
}

/// Trims [`is_space`] characters from both ends.
pub fn trim_space(s: &str) -> &str {
    s.trim_matches(is_space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_set_matches_browser_whitespace() {
        assert!(is_space(' '));
        assert!(is_space('\u{A0}'));
        assert!(is_space('\u{FEFF}'));
        assert!(is_space('\u{2028}'));
        assert!(!is_space('\u{85}'));
        assert!(!is_space('a'));
        assert_eq!(trim_space("\u{FEFF} rust\u{85}"), "rust\u{85}");
    }
}
