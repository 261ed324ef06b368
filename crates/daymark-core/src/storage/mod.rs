mod config;

pub use config::{CelebrationConfig, Config, DisplayConfig, TimelineConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/daymark[-dev]/` based on DAYMARK_ENV.
///
/// Set DAYMARK_ENV=dev to use the development directory, or
/// DAYMARK_CONFIG_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("DAYMARK_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("DAYMARK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("daymark-dev")
            } else {
                base_dir.join("daymark")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
