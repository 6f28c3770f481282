//! Random password generation with a five-point strength score.
//!
//! The [`generators`] module holds the two pure pieces: a generator that
//! samples characters from the enabled classes and a scorer that counts
//! which of five criteria a password meets. [`core::controller`] wires them
//! into an event-driven widget state used by the interactive CLI, and
//! [`api`] exposes them over HTTP.

pub mod api;
pub mod cli;
pub mod clipboard;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::generators::password::generate;
pub use crate::generators::strength::score;
pub use crate::models::GenerationConfig;
