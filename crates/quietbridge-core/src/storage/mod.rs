mod config;
pub mod json_store;

pub use config::{Config, StatsConfig, StreakConfig};
pub use json_store::{CheckinStore, JsonStore, MoodStore, CHECKINS_FILE, MOODS_FILE};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the QuietBridge data directory, creating it if needed.
///
/// `QUIETBRIDGE_HOME` overrides the location outright. Otherwise this is
/// `~/.config/quietbridge[-dev]/`, with QUIETBRIDGE_ENV=dev selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("QUIETBRIDGE_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("QUIETBRIDGE_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("quietbridge-dev")
            } else {
                base_dir.join("quietbridge")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
