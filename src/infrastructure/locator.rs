//! Store location strategies.
//!
//! The original tooling had two modes: read a hardcoded store path, or
//! scan every workspace directory and use the first store with chat data.
//! Both collapse into one resolver handed to the export pipeline.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, Result, WorkspaceStore};

use super::store_paths::STATE_DB_NAME;
use super::store_reader::{StateDbReader, GENERATIONS_KEY, PROMPTS_KEY};

/// Strategy for resolving the chat store to read.
#[derive(Debug, Clone)]
pub enum StoreResolver {
    /// Use exactly this store file.
    Fixed(PathBuf),
    /// Scan immediate subdirectories of this root and pick the first store
    /// holding prompt data.
    Discover(PathBuf),
}

impl StoreResolver {
    /// Resolves to a concrete store path.
    ///
    /// # Errors
    /// Returns `StoreNotFound` if the fixed path does not exist, the scan
    /// root is absent, or no candidate holds prompt data.
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            Self::Fixed(path) => {
                if path.is_file() {
                    Ok(path.clone())
                } else {
                    Err(AppError::StoreNotFound { path: path.clone() })
                }
            }
            Self::Discover(root) => discover_store(root),
        }
    }
}

/// Scans workspace directories for the first store with prompt data.
///
/// The scan is best-effort: an unreadable or malformed candidate must
/// never abort it, only drop out of consideration.
fn discover_store(root: &Path) -> Result<PathBuf> {
    let mut skipped = 0usize;

    for candidate in candidate_stores(root)? {
        match probe_prompt_count(&candidate) {
            Ok(count) if count > 0 => {
                tracing::info!("Found chat store: {}", candidate.display());
                return Ok(candidate);
            }
            Ok(_) => {
                tracing::debug!("No prompt data in {}", candidate.display());
            }
            Err(e) => {
                skipped += 1;
                tracing::debug!("Skipping candidate {}: {}", candidate.display(), e);
            }
        }
    }

    if skipped > 0 {
        tracing::warn!("Skipped {skipped} unreadable candidate store(s)");
    }

    Err(AppError::StoreNotFound {
        path: root.to_path_buf(),
    })
}

/// Lists every candidate store with its prompt/generation counts.
///
/// Unreadable candidates are logged and omitted.
///
/// # Errors
/// Returns `StoreNotFound` if the scan root is absent.
pub fn scan_workspaces(root: &Path) -> Result<Vec<WorkspaceStore>> {
    let mut stores = Vec::new();

    for candidate in candidate_stores(root)? {
        match probe_store(&candidate) {
            Ok(store) => stores.push(store),
            Err(e) => {
                tracing::warn!("Skipping candidate {}: {}", candidate.display(), e);
            }
        }
    }

    Ok(stores)
}

/// Candidate store files under `root`, sorted by path for a stable scan
/// order.
fn candidate_stores(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AppError::StoreNotFound {
            path: root.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(root)
        .map_err(|e| AppError::io(format!("Failed to read {}", root.display()), e))?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.path().join(STATE_DB_NAME))
        .filter(|db_path| db_path.exists())
        .collect();
    candidates.sort();

    Ok(candidates)
}

/// Opens a candidate just long enough to count its prompt rows; the
/// read-only handle is released when the reader drops.
fn probe_prompt_count(path: &Path) -> Result<i64> {
    let reader = StateDbReader::open(path)?;
    reader.count_for_key(PROMPTS_KEY)
}

fn probe_store(path: &Path) -> Result<WorkspaceStore> {
    let reader = StateDbReader::open(path)?;
    Ok(WorkspaceStore {
        prompt_count: reader.count_for_key(PROMPTS_KEY)?,
        generation_count: reader.count_for_key(GENERATIONS_KEY)?,
        path: path.to_path_buf(),
    })
}
