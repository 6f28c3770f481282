// src/generators/strength.rs
use std::fmt;

use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Symbols that count towards the symbol criterion. Narrower than the
/// generator's symbol class.
pub const SCORED_SYMBOLS: &str = "$@#&!";

pub const MIN_STRONG_LENGTH: usize = 8;

pub const MAX_SCORE: u8 = 5;

/// The five independent checks a password is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    MinLength,
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::MinLength,
        Criterion::Lowercase,
        Criterion::Uppercase,
        Criterion::Digit,
        Criterion::Symbol,
    ];

    pub fn is_met(self, password: &str) -> bool {
        match self {
            Criterion::MinLength => password.chars().count() >= MIN_STRONG_LENGTH,
            Criterion::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Criterion::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Criterion::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Criterion::Symbol => password.chars().any(|c| SCORED_SYMBOLS.contains(c)),
        }
    }

    pub fn suggestion(self) -> &'static str {
        match self {
            Criterion::MinLength => "Use at least 8 characters",
            Criterion::Lowercase => "Add lowercase letters for better security",
            Criterion::Uppercase => "Add uppercase letters for better security",
            Criterion::Digit => "Add numbers for better security",
            Criterion::Symbol => "Add one of $ @ # & ! for better security",
        }
    }
}

/// Count of satisfied criteria, 0 through 5.
pub fn score(password: &str) -> u8 {
    Criterion::ALL
        .iter()
        .filter(|criterion| criterion.is_met(password))
        .count() as u8
}

/// Text label shown next to the meter. Indexed directly by score, so a
/// score of zero has its own entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    TooWeak,
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLabel::TooWeak,
            1 => StrengthLabel::VeryWeak,
            2 => StrengthLabel::Weak,
            3 => StrengthLabel::Medium,
            4 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::TooWeak => write!(f, "Too Weak"),
            StrengthLabel::VeryWeak => write!(f, "Very Weak"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// Coarse display category used for the meter color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StrengthBand {
    Weak,
    Medium,
    Strong,
}

impl StrengthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthBand::Weak,
            3..=4 => StrengthBand::Medium,
            _ => StrengthBand::Strong,
        }
    }
}

impl fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthBand::Weak => write!(f, "weak"),
            StrengthBand::Medium => write!(f, "medium"),
            StrengthBand::Strong => write!(f, "strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    pub score: u8,
    pub label: StrengthLabel,
    pub band: StrengthBand,
    /// Criteria the password does not satisfy, in scoring order.
    pub unmet: Vec<Criterion>,
}

impl StrengthReport {
    pub fn analyze(password: &str) -> Self {
        let unmet: Vec<Criterion> = Criterion::ALL
            .iter()
            .copied()
            .filter(|criterion| !criterion.is_met(password))
            .collect();
        let score = MAX_SCORE - unmet.len() as u8;

        StrengthReport {
            score,
            label: StrengthLabel::from_score(score),
            band: StrengthBand::from_score(score),
            unmet,
        }
    }

    /// Fraction of the meter to fill, 0.0 through 1.0.
    pub fn ratio(&self) -> f32 {
        f32::from(self.score) / f32::from(MAX_SCORE)
    }

    pub fn feedback(&self) -> Vec<String> {
        let mut feedback = vec![format!("{} password", self.label)];
        if self.unmet.is_empty() {
            feedback.push("Excellent password strength!".to_string());
        } else {
            feedback.extend(self.unmet.iter().map(|c| c.suggestion().to_string()));
        }
        feedback
    }
}

impl Default for StrengthReport {
    fn default() -> Self {
        StrengthReport::analyze("")
    }
}
