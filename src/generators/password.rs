// src/generators/password.rs
//! Random password generation.
//!
//! Characters are drawn independently and uniformly, with replacement, from
//! the [`Alphabet`] implied by a [`GenerationConfig`]. The default source is
//! `rand::thread_rng()`, but no guarantee of cryptographic strength is made
//! for generated values: this is a convenience generator for the widget, not
//! a secret-management primitive. Tests should check structure and
//! distribution, never exact output, unless they inject a seeded source.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::generators::alphabet::Alphabet;
use crate::models::GenerationConfig;

#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password of exactly `config.length` characters using the
    /// supplied randomness source.
    pub fn generate<R: Rng + ?Sized>(&self, config: &GenerationConfig, rng: &mut R) -> String {
        if config.length == 0 {
            return String::new();
        }

        let alphabet = Alphabet::from_config(config);
        let chars = alphabet.chars();
        let dist = Uniform::from(0..chars.len());

        (0..config.length)
            .map(|_| chars[dist.sample(rng)])
            .collect()
    }

    /// Generate with the thread-local generator.
    pub fn generate_password(&self, config: &GenerationConfig) -> String {
        self.generate(config, &mut rand::thread_rng())
    }
}

/// Flat entry point taking a signed length; anything `<= 0` yields an empty
/// string.
pub fn generate(length: i64, include_uppercase: bool, include_digits: bool, include_symbols: bool) -> String {
    let length = usize::try_from(length).unwrap_or(0);
    let config = GenerationConfig::new(length, include_uppercase, include_digits, include_symbols);
    PasswordGenerator::new().generate_password(&config)
}
