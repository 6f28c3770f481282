// src/core/controller.rs
//! Widget state and the event reducer that drives it.
//!
//! Every change to the generation settings produces a fresh password and a
//! fresh strength report in the same step. State is replaced, never shared:
//! `reduce` takes a snapshot and returns the next one.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::clipboard::ClipboardWriter;
use crate::generators::{PasswordGenerator, StrengthReport};
use crate::models::{clamp_length, GenerationConfig};

/// Result of the most recent copy request, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied { at: DateTime<Utc> },
    Failed { at: DateTime<Utc>, reason: String },
}

impl CopyStatus {
    fn since(&self) -> Option<DateTime<Utc>> {
        match self {
            CopyStatus::Idle => None,
            CopyStatus::Copied { at } | CopyStatus::Failed { at, .. } => Some(*at),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ack_duration: Duration) -> bool {
        match self.since() {
            None => false,
            Some(at) => match chrono::Duration::from_std(ack_duration) {
                Ok(ack) => now >= at + ack,
                Err(_) => false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Raw slider value; clamped to the allowed range.
    SetLength(i64),
    ToggleUppercase,
    ToggleDigits,
    ToggleSymbols,
    Regenerate,
    ToggleShowPassword,
    CopyFinished {
        at: DateTime<Utc>,
        outcome: Result<(), String>,
    },
    Tick(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub config: GenerationConfig,
    pub password: String,
    pub strength: StrengthReport,
    pub show_password: bool,
    pub copy_status: CopyStatus,
}

impl WidgetState {
    /// Initial state with a password already generated for `config`.
    pub fn new<R: Rng + ?Sized>(config: GenerationConfig, rng: &mut R) -> Self {
        let config = config.clamped();
        let password = PasswordGenerator::new().generate(&config, rng);
        let strength = StrengthReport::analyze(&password);
        WidgetState {
            config,
            password,
            strength,
            show_password: false,
            copy_status: CopyStatus::Idle,
        }
    }

    fn on_config_change<R: Rng + ?Sized>(mut self, config: GenerationConfig, rng: &mut R) -> Self {
        self.config = config;
        self.password = PasswordGenerator::new().generate(&self.config, rng);
        self.strength = StrengthReport::analyze(&self.password);
        log::debug!(
            "Regenerated password: length={} uppercase={} digits={} symbols={} score={}",
            self.config.length,
            self.config.include_uppercase,
            self.config.include_digits,
            self.config.include_symbols,
            self.strength.score
        );
        self
    }
}

/// Apply one event to a state snapshot.
pub fn reduce<R: Rng + ?Sized>(
    state: &WidgetState,
    event: WidgetEvent,
    rng: &mut R,
    ack_duration: Duration,
) -> WidgetState {
    let next = state.clone();
    let mut config = state.config;

    match event {
        WidgetEvent::SetLength(length) => {
            config.length = clamp_length(length);
            next.on_config_change(config, rng)
        }
        WidgetEvent::ToggleUppercase => {
            config.include_uppercase = !config.include_uppercase;
            next.on_config_change(config, rng)
        }
        WidgetEvent::ToggleDigits => {
            config.include_digits = !config.include_digits;
            next.on_config_change(config, rng)
        }
        WidgetEvent::ToggleSymbols => {
            config.include_symbols = !config.include_symbols;
            next.on_config_change(config, rng)
        }
        WidgetEvent::Regenerate => next.on_config_change(config, rng),
        WidgetEvent::ToggleShowPassword => WidgetState {
            show_password: !state.show_password,
            ..next
        },
        WidgetEvent::CopyFinished { at, outcome } => {
            let copy_status = match outcome {
                Ok(()) => CopyStatus::Copied { at },
                Err(reason) => CopyStatus::Failed { at, reason },
            };
            WidgetState { copy_status, ..next }
        }
        WidgetEvent::Tick(now) => {
            if state.copy_status.is_expired(now, ack_duration) {
                WidgetState {
                    copy_status: CopyStatus::Idle,
                    ..next
                }
            } else {
                next
            }
        }
    }
}

/// Owns the current state together with its randomness source and
/// clipboard, and dispatches events against them.
pub struct Controller<R, C> {
    state: WidgetState,
    rng: R,
    clipboard: C,
    ack_duration: Duration,
}

impl<R: Rng, C: ClipboardWriter> Controller<R, C> {
    pub fn new(config: GenerationConfig, mut rng: R, clipboard: C, ack_duration: Duration) -> Self {
        let state = WidgetState::new(config, &mut rng);
        Controller {
            state,
            rng,
            clipboard,
            ack_duration,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn ack_duration(&self) -> Duration {
        self.ack_duration
    }

    pub fn dispatch(&mut self, event: WidgetEvent) -> &WidgetState {
        self.state = reduce(&self.state, event, &mut self.rng, self.ack_duration);
        &self.state
    }

    /// Hand the current password to the clipboard and record the outcome.
    pub fn copy_password(&mut self, now: DateTime<Utc>) -> &WidgetState {
        let outcome = match self.clipboard.write_text(&self.state.password) {
            Ok(()) => {
                log::info!("Password copied to clipboard");
                Ok(())
            }
            Err(e) => {
                log::warn!("Copy to clipboard failed: {}", e);
                Err(e.to_string())
            }
        };
        self.dispatch(WidgetEvent::CopyFinished { at: now, outcome })
    }

    pub fn into_parts(self) -> (WidgetState, R, C) {
        (self.state, self.rng, self.clipboard)
    }
}
