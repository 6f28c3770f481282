// src/cli/menu.rs
use std::fmt;

use anyhow::Result;
use chrono::Utc;
use console::style;
use inquire::{CustomType, InquireError, Select};

use crate::cli::handlers::styled_label;
use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::core::{Config, Controller, CopyStatus, WidgetEvent, WidgetState};
use crate::models::{clamp_length, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::utils::{display_password, on_off, strength_meter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Copy,
    Regenerate,
    SetLength(usize),
    ToggleUppercase(bool),
    ToggleDigits(bool),
    ToggleSymbols(bool),
    ToggleShowPassword(bool),
    Quit,
}

impl MenuAction {
    pub fn for_state(state: &WidgetState) -> Vec<MenuAction> {
        vec![
            MenuAction::Copy,
            MenuAction::Regenerate,
            MenuAction::SetLength(state.config.length),
            MenuAction::ToggleUppercase(state.config.include_uppercase),
            MenuAction::ToggleDigits(state.config.include_digits),
            MenuAction::ToggleSymbols(state.config.include_symbols),
            MenuAction::ToggleShowPassword(state.show_password),
            MenuAction::Quit,
        ]
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Copy => write!(f, "📋 Copy"),
            MenuAction::Regenerate => write!(f, "🔄 Regenerate"),
            MenuAction::SetLength(length) => write!(f, "📏 Password Length: {}", length),
            MenuAction::ToggleUppercase(on) => write!(f, "🔠 Include Uppercase Letters [{}]", on_off(*on)),
            MenuAction::ToggleDigits(on) => write!(f, "🔢 Include Numbers [{}]", on_off(*on)),
            MenuAction::ToggleSymbols(on) => write!(f, "🔣 Include Special Characters [{}]", on_off(*on)),
            MenuAction::ToggleShowPassword(on) => write!(f, "👁  Show Password [{}]", on_off(*on)),
            MenuAction::Quit => write!(f, "🚪 Quit"),
        }
    }
}

pub fn run_interactive(config: &Config) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSWORD GENERATOR          ║");
    println!("╚══════════════════════════════════════╝");

    let mut controller = Controller::new(
        config.generation_defaults(),
        rand::thread_rng(),
        SystemClipboard::new(),
        config.copy_ack_duration,
    );

    loop {
        controller.dispatch(WidgetEvent::Tick(Utc::now()));
        render(controller.state());

        let actions = MenuAction::for_state(controller.state());
        let action = match Select::new("Choose an action:", actions).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if action == MenuAction::Quit {
            break;
        }
        apply_action(&mut controller, action)?;
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn apply_action<R: rand::Rng, C: ClipboardWriter>(controller: &mut Controller<R, C>, action: MenuAction) -> Result<()> {
    match action {
        MenuAction::Copy => {
            controller.copy_password(Utc::now());
        }
        MenuAction::Regenerate => {
            controller.dispatch(WidgetEvent::Regenerate);
        }
        MenuAction::SetLength(current) => {
            let prompt = format!("Password length ({}-{}):", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
            let requested = match CustomType::<i64>::new(&prompt)
                .with_default(current as i64)
                .with_error_message("Please type a whole number")
                .prompt()
            {
                Ok(requested) => requested,
                Err(InquireError::OperationCanceled) => return Ok(()),
                Err(e) => return Err(e.into()),
            };
            if clamp_length(requested) as i64 != requested {
                println!(
                    "{}",
                    style(format!("Length kept within {}-{}", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)).yellow()
                );
            }
            controller.dispatch(WidgetEvent::SetLength(requested));
        }
        MenuAction::ToggleUppercase(_) => {
            controller.dispatch(WidgetEvent::ToggleUppercase);
        }
        MenuAction::ToggleDigits(_) => {
            controller.dispatch(WidgetEvent::ToggleDigits);
        }
        MenuAction::ToggleSymbols(_) => {
            controller.dispatch(WidgetEvent::ToggleSymbols);
        }
        MenuAction::ToggleShowPassword(_) => {
            controller.dispatch(WidgetEvent::ToggleShowPassword);
        }
        MenuAction::Quit => {}
    }
    Ok(())
}

fn render(state: &WidgetState) {
    println!();
    println!(
        "  Password: {}",
        style(display_password(&state.password, state.show_password)).bold()
    );
    println!(
        "  Password Strength: {} {}",
        strength_meter(&state.strength, 20),
        styled_label(&state.strength)
    );

    match &state.copy_status {
        CopyStatus::Idle => {}
        CopyStatus::Copied { .. } => println!("  {}", style("✅ Password copied!").green()),
        CopyStatus::Failed { reason, .. } => {
            println!("  {} {}", style("❌ Copy failed:").red().bold(), reason)
        }
    }
    println!();
}
