// src/cli/handlers.rs
use anyhow::Result;
use console::style;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::cli::GenerateOptions;
use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::core::Config;
use crate::generators::strength::{Criterion, StrengthBand, StrengthLabel};
use crate::generators::{PasswordGenerator, StrengthReport};
use crate::models::{clamp_length, GenerationConfig};
use crate::utils::strength_meter;

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthReport,
}

#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub config: GenerationConfig,
    pub passwords: Vec<GeneratedPassword>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreOutput {
    pub score: u8,
    pub label: StrengthLabel,
    pub band: StrengthBand,
    pub unmet: Vec<Criterion>,
    pub feedback: Vec<String>,
}

fn resolve_flag(on: bool, off: bool, default: bool) -> bool {
    if off {
        false
    } else if on {
        true
    } else {
        default
    }
}

/// Merge command-line options over the configured defaults. The length is
/// clamped into the slider range here, as the caller of the generator.
pub fn resolve_generation_config(config: &Config, opts: &GenerateOptions) -> GenerationConfig {
    let defaults = config.generation_defaults();

    let length = match opts.length {
        Some(requested) => {
            let clamped = clamp_length(requested);
            if clamped as i64 != requested {
                log::warn!("Length {} is out of range, using {}", requested, clamped);
            }
            clamped
        }
        None => defaults.length,
    };

    GenerationConfig::new(
        length,
        resolve_flag(opts.uppercase, opts.no_uppercase, defaults.include_uppercase),
        resolve_flag(opts.digits, opts.no_digits, defaults.include_digits),
        resolve_flag(opts.symbols, opts.no_symbols, defaults.include_symbols),
    )
}

pub fn build_generate_output<R: RngCore + ?Sized>(generation: GenerationConfig, count: usize, rng: &mut R) -> GenerateOutput {
    let generator = PasswordGenerator::new();
    let passwords = (0..count.max(1))
        .map(|_| {
            let password = generator.generate(&generation, rng);
            let strength = StrengthReport::analyze(&password);
            GeneratedPassword { password, strength }
        })
        .collect();

    GenerateOutput {
        config: generation,
        passwords,
        copied: None,
        copy_error: None,
    }
}

pub fn copy_last<C: ClipboardWriter>(output: &mut GenerateOutput, clipboard: &mut C) {
    let Some(last) = output.passwords.last() else {
        return;
    };
    match clipboard.write_text(&last.password) {
        Ok(()) => {
            output.copied = Some(true);
        }
        Err(e) => {
            log::warn!("Copy to clipboard failed: {}", e);
            output.copied = Some(false);
            output.copy_error = Some(e.to_string());
        }
    }
}

pub fn handle_generate(config: &Config, opts: &GenerateOptions, json: bool) -> Result<()> {
    let generation = resolve_generation_config(config, opts);

    let mut rng: Box<dyn RngCore> = match opts.seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let mut output = build_generate_output(generation, opts.count, &mut *rng);

    if opts.copy {
        copy_last(&mut output, &mut SystemClipboard::new());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for generated in &output.passwords {
        println!("{}", generated.password);
        eprintln!(
            "  {} {} ({}/5)",
            strength_meter(&generated.strength, 10),
            styled_label(&generated.strength),
            generated.strength.score
        );
    }

    match (&output.copied, &output.copy_error) {
        (Some(true), _) => eprintln!("{}", style("Password copied!").green()),
        (Some(false), Some(e)) => eprintln!("{} {}", style("Copy failed:").red().bold(), e),
        _ => {}
    }

    Ok(())
}

impl From<&StrengthReport> for ScoreOutput {
    fn from(report: &StrengthReport) -> Self {
        ScoreOutput {
            score: report.score,
            label: report.label,
            band: report.band,
            unmet: report.unmet.clone(),
            feedback: report.feedback(),
        }
    }
}

pub fn build_score_output(password: &str) -> ScoreOutput {
    ScoreOutput::from(&StrengthReport::analyze(password))
}

pub fn handle_score(password: &str, json: bool) -> Result<()> {
    let report = StrengthReport::analyze(password);
    let output = ScoreOutput::from(&report);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "Strength: {}/5 {} {}",
        output.score,
        strength_meter(&report, 10),
        styled_label(&report)
    );
    for line in output.feedback.iter().skip(1) {
        println!("  • {}", line);
    }

    Ok(())
}

/// Label colored by band: red, yellow or green.
pub fn styled_label(report: &StrengthReport) -> console::StyledObject<String> {
    let label = style(report.label.to_string());
    match report.band {
        StrengthBand::Weak => label.red(),
        StrengthBand::Medium => label.yellow(),
        StrengthBand::Strong => label.green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{self, ClipboardError};

    struct FailingClipboard;

    impl ClipboardWriter for FailingClipboard {
        fn write_text(&mut self, _text: &str) -> clipboard::Result<()> {
            Err(ClipboardError::NoHelper("xclip".to_string()))
        }
    }

    #[derive(Default)]
    struct MemoryClipboard(Option<String>);

    impl ClipboardWriter for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> clipboard::Result<()> {
            self.0 = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn options_fall_back_to_config() {
        let generation = resolve_generation_config(&Config::default(), &GenerateOptions::default());
        assert_eq!(generation, GenerationConfig::default());
    }

    #[test]
    fn options_override_config() {
        let opts = GenerateOptions {
            length: Some(12),
            no_uppercase: true,
            digits: true,
            symbols: true,
            ..Default::default()
        };
        let generation = resolve_generation_config(&Config::default(), &opts);
        assert_eq!(generation, GenerationConfig::new(12, false, true, true));
    }

    #[test]
    fn out_of_range_length_is_clamped() {
        let short = GenerateOptions { length: Some(0), ..Default::default() };
        let long = GenerateOptions { length: Some(64), ..Default::default() };
        assert_eq!(resolve_generation_config(&Config::default(), &short).length, 6);
        assert_eq!(resolve_generation_config(&Config::default(), &long).length, 30);
    }

    #[test]
    fn output_contains_requested_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let output = build_generate_output(GenerationConfig::new(10, true, true, false), 4, &mut rng);
        assert_eq!(output.passwords.len(), 4);
        for generated in &output.passwords {
            assert_eq!(generated.password.len(), 10);
            assert_eq!(generated.strength, StrengthReport::analyze(&generated.password));
        }
    }

    #[test]
    fn copy_success_and_failure_are_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut output = build_generate_output(GenerationConfig::default(), 2, &mut rng);

        let mut memory = MemoryClipboard::default();
        copy_last(&mut output, &mut memory);
        assert_eq!(output.copied, Some(true));
        assert_eq!(memory.0.as_deref(), Some(output.passwords[1].password.as_str()));

        copy_last(&mut output, &mut FailingClipboard);
        assert_eq!(output.copied, Some(false));
        assert!(output.copy_error.unwrap().contains("xclip"));
    }

    #[test]
    fn score_output_matches_reference_values() {
        let output = build_score_output("Abcdefg1");
        assert_eq!(output.score, 4);
        assert_eq!(output.band, StrengthBand::Medium);
        assert_eq!(output.unmet, vec![Criterion::Symbol]);
    }

    #[test]
    fn score_output_mirrors_report() {
        let report = StrengthReport::analyze("abcdefgh");
        let output = ScoreOutput::from(&report);
        assert_eq!(output.score, report.score);
        assert_eq!(output.label, report.label);
        assert_eq!(output.band, report.band);
        assert_eq!(output.unmet, report.unmet);
        assert_eq!(output.feedback, report.feedback());
    }
}
