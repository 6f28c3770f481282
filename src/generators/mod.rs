// src/generators/mod.rs
pub mod alphabet;
pub mod password;
pub mod strength;

pub use alphabet::{Alphabet, CharClass};
pub use password::PasswordGenerator;
pub use strength::{score, StrengthBand, StrengthLabel, StrengthReport};
