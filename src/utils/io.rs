// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory, where a `.env` may live.
pub fn get_app_config_dir() -> Option<PathBuf> {
    match directories::ProjectDirs::from("com", "rustpassgen", "rust_passgen") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().to_path_buf()),
        None => {
            log::debug!("Could not determine config directory");
            None
        }
    }
}

/// Load `.env` from the working directory, then from the app config dir.
/// Variables already set in the process environment win. Read failures are
/// returned rather than logged, since this runs before the logger exists.
pub fn load_dotenv() -> Vec<String> {
    let mut warnings = Vec::new();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            warnings.push(format!("Failed to read .env: {}", e));
        }
    }

    if let Some(dir) = get_app_config_dir() {
        let path = dir.join(".env");
        if path.is_file() {
            if let Err(e) = dotenvy::from_path(&path) {
                warnings.push(format!("Failed to read {}: {}", path.display(), e));
            }
        }
    }

    warnings
}
