// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::models::{clamp_length, GenerationConfig};

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_digits: bool,
    pub default_include_symbols: bool,

    // Clipboard
    pub copy_ack_duration: Duration,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let generation = GenerationConfig::default();
        Self {
            // Password Generation
            default_password_length: generation.length,
            default_include_uppercase: generation.include_uppercase,
            default_include_digits: generation.include_digits,
            default_include_symbols: generation.include_symbols,

            // Clipboard
            copy_ack_duration: Duration::from_millis(2000),

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from the environment, returning warnings instead of logging
    /// them. Used before the logger is installed.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        Self::from_lookup_with_warnings(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, logging any warnings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, warnings) = Self::from_lookup_with_warnings(lookup);
        for warning in &warnings {
            log::warn!("{}", warning);
        }
        config
    }

    /// Build a configuration from any key lookup, starting from defaults.
    /// Ignored or adjusted values are reported in the returned warnings.
    pub fn from_lookup_with_warnings<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(length) = parse_var::<i64, _>(&lookup, &mut warnings, "DEFAULT_PASSWORD_LENGTH") {
            let clamped = clamp_length(length);
            if clamped as i64 != length {
                warnings.push(format!("DEFAULT_PASSWORD_LENGTH {} out of range, using {}", length, clamped));
            }
            config.default_password_length = clamped;
        }

        if let Some(include) = parse_var(&lookup, &mut warnings, "DEFAULT_INCLUDE_UPPERCASE") {
            config.default_include_uppercase = include;
        }

        if let Some(include) = parse_var(&lookup, &mut warnings, "DEFAULT_INCLUDE_DIGITS") {
            config.default_include_digits = include;
        }

        if let Some(include) = parse_var(&lookup, &mut warnings, "DEFAULT_INCLUDE_SYMBOLS") {
            config.default_include_symbols = include;
        }

        // Clipboard
        if let Some(millis) = parse_var::<u64, _>(&lookup, &mut warnings, "COPY_ACK_MILLIS") {
            config.copy_ack_duration = Duration::from_millis(millis);
        }

        // Web Interface
        if let Some(port) = parse_var(&lookup, &mut warnings, "WEB_PORT") {
            config.web_port = port;
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', keeping {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    /// Generation settings the widget starts with.
    pub fn generation_defaults(&self) -> GenerationConfig {
        GenerationConfig::new(
            self.default_password_length,
            self.default_include_uppercase,
            self.default_include_digits,
            self.default_include_symbols,
        )
    }
}

fn parse_var<T, F>(lookup: &F, warnings: &mut Vec<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring unparseable value '{}' for {}", raw, key));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.default_password_length, 8);
        assert_eq!(config.copy_ack_duration, Duration::from_millis(2000));
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.log_file.is_none());
        assert_eq!(config.generation_defaults(), GenerationConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "16"),
            ("DEFAULT_INCLUDE_UPPERCASE", "false"),
            ("DEFAULT_INCLUDE_DIGITS", "true"),
            ("DEFAULT_INCLUDE_SYMBOLS", "true"),
            ("COPY_ACK_MILLIS", "500"),
            ("WEB_PORT", "8088"),
            ("WEB_ADDRESS", "0.0.0.0"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "/tmp/passgen.log"),
        ]);
        let generation = config.generation_defaults();
        assert_eq!(generation, GenerationConfig::new(16, false, true, true));
        assert_eq!(config.copy_ack_duration, Duration::from_millis(500));
        assert_eq!(config.web_port, 8088);
        assert_eq!(config.web_address, "0.0.0.0");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/passgen.log")));
    }

    #[test]
    fn default_length_is_clamped() {
        assert_eq!(config_from(&[("DEFAULT_PASSWORD_LENGTH", "2")]).default_password_length, 6);
        assert_eq!(config_from(&[("DEFAULT_PASSWORD_LENGTH", "99")]).default_password_length, 30);
    }

    #[test]
    fn adjusted_and_ignored_values_are_reported() {
        let vars: HashMap<&str, &str> = [
            ("DEFAULT_PASSWORD_LENGTH", "99"),
            ("DEFAULT_INCLUDE_DIGITS", "maybe"),
            ("LOG_LEVEL", "loud"),
        ]
        .into_iter()
        .collect();
        let (config, warnings) = Config::from_lookup_with_warnings(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.default_password_length, 30);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.contains("DEFAULT_PASSWORD_LENGTH 99 out of range")));
        assert!(warnings.iter().any(|w| w.contains("Ignoring unparseable value 'maybe' for DEFAULT_INCLUDE_DIGITS")));
        assert!(warnings.iter().any(|w| w.contains("Unknown log level 'loud'")));
    }

    #[test]
    fn clean_environment_has_no_warnings() {
        let (_, warnings) = Config::from_lookup_with_warnings(|_| None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn bad_values_are_ignored() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "twelve"),
            ("DEFAULT_INCLUDE_DIGITS", "maybe"),
            ("WEB_PORT", "70000"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.default_password_length, 8);
        assert!(!config.default_include_digits);
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }
}
