// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Shortest length the length slider allows.
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Longest length the length slider allows.
pub const MAX_PASSWORD_LENGTH: usize = 30;

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    /// Lowercase letters are always part of the alphabet.
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 8,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: false,
            include_symbols: false,
        }
    }
}

impl GenerationConfig {
    pub fn new(length: usize, include_uppercase: bool, include_digits: bool, include_symbols: bool) -> Self {
        Self {
            length,
            include_uppercase,
            include_lowercase: true,
            include_digits,
            include_symbols,
        }
    }

    /// Returns a copy with `length` forced into the slider range and the
    /// lowercase class switched back on.
    pub fn clamped(mut self) -> Self {
        self.length = clamp_length(i64::try_from(self.length).unwrap_or(i64::MAX));
        self.include_lowercase = true;
        self
    }

    pub fn is_in_range(&self) -> bool {
        (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length)
    }
}

/// Clamp a user supplied length (possibly negative) into [6, 30].
pub fn clamp_length(length: i64) -> usize {
    length.clamp(MIN_PASSWORD_LENGTH as i64, MAX_PASSWORD_LENGTH as i64) as usize
}
