//! Cursor IDE path discovery.
//!
//! Handles locating Cursor's data directories across different platforms.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, Result};

/// Known Cursor data directory locations by platform.
const CURSOR_CONFIG_PATHS: &[&str] = &[
    // Linux
    ".config/Cursor",
    // macOS
    "Library/Application Support/Cursor",
    // Alternative locations
    ".cursor",
];

/// Subdirectory containing per-workspace state databases.
const WORKSPACE_STORAGE_PATH: &str = "User/workspaceStorage";

/// File name of a workspace state database.
pub const STATE_DB_NAME: &str = "state.vscdb";

/// Discovers the Cursor configuration directory.
///
/// # Errors
/// Returns error if home directory cannot be determined or Cursor is not installed.
pub fn find_cursor_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| AppError::Config {
        message: "Could not determine home directory".into(),
    })?;

    for path in CURSOR_CONFIG_PATHS {
        let full_path = home.join(path);
        if full_path.exists() && full_path.is_dir() {
            tracing::debug!("Found Cursor config at: {}", full_path.display());
            return Ok(full_path);
        }
    }

    Err(AppError::Config {
        message: format!("Cursor config directory not found. Searched: {CURSOR_CONFIG_PATHS:?}"),
    })
}

/// The directory whose immediate subdirectories each potentially hold a
/// workspace store file.
#[must_use]
pub fn workspace_storage_dir(cursor_dir: &Path) -> PathBuf {
    cursor_dir.join(WORKSPACE_STORAGE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cursor_config_returns_result() {
        // This test just ensures the function doesn't panic
        let _ = find_cursor_config_dir();
    }

    #[test]
    fn test_workspace_storage_dir_layout() {
        let dir = workspace_storage_dir(Path::new("/home/user/.config/Cursor"));
        assert_eq!(
            dir,
            PathBuf::from("/home/user/.config/Cursor/User/workspaceStorage")
        );
    }
}
