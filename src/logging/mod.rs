// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::core::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Build the `env_logger` builder for `config` without installing it.
///
/// Output goes to stderr unless `LOG_FILE` names a file, in which case
/// records are appended there. `RUST_LOG` still overrides the level.
pub fn builder(config: &Config) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .parse_env("RUST_LOG");

    match &config.log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    Ok(builder)
}

pub fn init_logging(config: &Config) -> Result<()> {
    builder(config)?.try_init()?;
    log::debug!("Logging initialized at level {}", config.log_level);
    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_and_parent_directory_are_created() {
        let dir = std::env::temp_dir().join(format!("rust_passgen_logs_{}", std::process::id()));
        let path = dir.join("nested").join("passgen.log");
        let config = Config {
            log_file: Some(path.clone()),
            ..Config::default()
        };

        assert!(builder(&config).is_ok());
        assert!(path.is_file());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn stderr_builder_needs_no_file() {
        assert!(builder(&Config::default()).is_ok());
    }
}
