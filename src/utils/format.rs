// src/utils/format.rs
use crate::generators::strength::{StrengthReport, MAX_SCORE};

const MASK_CHAR: char = '•';

/// Render a password for display, masking every character when hidden.
pub fn display_password(password: &str, visible: bool) -> String {
    if visible {
        password.to_string()
    } else {
        password.chars().map(|_| MASK_CHAR).collect()
    }
}

/// Text meter filled in proportion to `score / 5`, e.g. `[######----]`.
pub fn strength_meter(report: &StrengthReport, width: usize) -> String {
    let filled = width * usize::from(report.score) / usize::from(MAX_SCORE);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_password_is_masked_per_character() {
        assert_eq!(display_password("abc", false), "•••");
        assert_eq!(display_password("abc", true), "abc");
        assert_eq!(display_password("", false), "");
    }

    #[test]
    fn meter_fill_tracks_score() {
        assert_eq!(strength_meter(&StrengthReport::analyze(""), 10), "[----------]");
        assert_eq!(strength_meter(&StrengthReport::analyze("abcdefgh"), 10), "[####------]");
        assert_eq!(strength_meter(&StrengthReport::analyze("Abc123!@"), 10), "[##########]");
    }
}
