mod config;
pub mod document_db;
pub mod habit_file;

pub use config::Config;
pub use document_db::{Document, DocumentDb};
pub use habit_file::HabitFile;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/habitdeck[-dev]/` based on HABITDECK_ENV.
///
/// Set HABITDECK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITDECK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitdeck-dev")
    } else {
        base_dir.join("habitdeck")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}
