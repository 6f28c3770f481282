// src/generators/alphabet.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::GenerationConfig;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*-_+=[]{}~`";

/// One of the character groups a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Classes in the order they are appended to an alphabet.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.characters().contains(c)
    }

    fn enabled_in(self, config: &GenerationConfig) -> bool {
        match self {
            CharClass::Lowercase => true,
            CharClass::Uppercase => config.include_uppercase,
            CharClass::Digit => config.include_digits,
            CharClass::Symbol => config.include_symbols,
        }
    }
}

/// Ordered set of characters eligible for sampling.
///
/// Lowercase is always present, so an alphabet is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    classes: Vec<CharClass>,
    chars: Vec<char>,
}

impl Alphabet {
    pub fn from_config(config: &GenerationConfig) -> Self {
        let classes: Vec<CharClass> = CharClass::ALL
            .iter()
            .copied()
            .filter(|class| class.enabled_in(config))
            .collect();

        let chars = classes
            .iter()
            .flat_map(|class| class.characters().chars())
            .collect();

        Alphabet { classes, chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lowercase_only_by_default_flags() {
        let alphabet = Alphabet::from_config(&GenerationConfig::new(8, false, false, false));
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.classes(), &[CharClass::Lowercase]);
        assert_eq!(alphabet.chars()[0], 'a');
    }

    #[test]
    fn classes_appended_in_fixed_order() {
        let alphabet = Alphabet::from_config(&GenerationConfig::new(8, true, true, true));
        assert_eq!(alphabet.classes(), &CharClass::ALL);
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 18);
        assert_eq!(alphabet.chars()[26], 'A');
        assert_eq!(alphabet.chars()[52], '0');
        assert_eq!(alphabet.chars()[62], '!');
        assert_eq!(*alphabet.chars().last().unwrap(), '`');
    }

    #[test]
    fn digits_without_uppercase_follow_lowercase() {
        let alphabet = Alphabet::from_config(&GenerationConfig::new(8, false, true, false));
        assert_eq!(alphabet.len(), 36);
        assert_eq!(alphabet.chars()[26], '0');
        assert!(!alphabet.contains('A'));
    }

    #[test]
    fn lowercase_cannot_be_disabled() {
        let mut config = GenerationConfig::new(8, false, false, false);
        config.include_lowercase = false;
        let alphabet = Alphabet::from_config(&config);
        assert!(!alphabet.is_empty());
        assert!(alphabet.contains('z'));
    }

    #[test]
    fn classes_are_disjoint() {
        let alphabet = Alphabet::from_config(&GenerationConfig::new(8, true, true, true));
        let unique: HashSet<char> = alphabet.chars().iter().copied().collect();
        assert_eq!(unique.len(), alphabet.len());
    }
}
