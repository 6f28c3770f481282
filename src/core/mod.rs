// src/core/mod.rs
pub mod config;
pub mod controller;

pub use config::Config;
pub use controller::{reduce, Controller, CopyStatus, WidgetEvent, WidgetState};
