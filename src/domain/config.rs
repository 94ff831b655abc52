//! Configuration models for the export tool.
//!
//! All values are optional in the file; missing keys fall back to the
//! defaults used by the bare no-argument invocation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::models::DEFAULT_PROJECT_LABEL;

/// Export output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default output file when `--output` is not given.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Project label stamped on every record.
    #[serde(default = "default_project_label")]
    pub project_label: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            project_label: default_project_label(),
        }
    }
}

fn default_output_file() -> String {
    "cursor_chat_records.csv".to_string()
}

fn default_project_label() -> String {
    DEFAULT_PROJECT_LABEL.to_string()
}

/// Filesystem path overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    /// Custom Cursor config directory (overrides platform discovery).
    #[serde(default)]
    pub cursor_dir: Option<PathBuf>,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub paths: PathsConfig,
}

impl AppConfig {
    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cursor-chat-export")
    }

    /// Get the configuration file path.
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        Self::default_data_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_export_contract() {
        let config = AppConfig::default();
        assert_eq!(config.export.output_file, "cursor_chat_records.csv");
        assert_eq!(config.export.project_label, "cursor-chat-memory");
        assert!(config.paths.cursor_dir.is_none());
    }

    #[test]
    fn config_file_lives_under_data_dir() {
        let path = AppConfig::config_file_path();
        assert!(path.ends_with(".cursor-chat-export/config.toml"));
    }
}
