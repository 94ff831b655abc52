//! Configuration file management.
//!
//! Loads the optional TOML configuration from
//! `~/.cursor-chat-export/config.toml`:
//!
//! ```toml
//! [export]
//! output_file = "cursor_chat_records.csv"
//! project_label = "cursor-chat-memory"
//!
//! [paths]
//! # cursor_dir = "/custom/path/to/Cursor"
//! ```

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, Result};

/// Load configuration from file or fall back to defaults.
///
/// # Errors
/// Returns error if file exists but cannot be read or parsed.
pub fn load_config() -> Result<AppConfig> {
    let config_path = AppConfig::config_file_path();

    if config_path.exists() {
        load_config_from_file(&config_path)
    } else {
        Ok(AppConfig::default())
    }
}

/// Load configuration from a specific file.
///
/// # Errors
/// Returns error if file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    toml::from_str(&content).map_err(|e| AppError::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}
