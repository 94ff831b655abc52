//! Export pipeline orchestration.
//!
//! Loads the two chat arrays from a located store and reconciles them into
//! the final record sequence.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::domain::{AppError, ChatRecord, Result};
use crate::infrastructure::{StateDbReader, GENERATIONS_KEY, PROMPTS_KEY};

use super::parser::{parse_generations, parse_prompts};
use super::reconciler::reconcile;

/// Loads and reconciles records from a concrete store file.
///
/// Discovery already filters candidates by the prompts key, but presence
/// of both keys is re-checked here so a fixed-path run fails the same way.
///
/// # Errors
/// Returns `MissingData` if a required key is absent, or a JSON error if a
/// stored value is not an array.
pub fn extract_from_store(
    path: &Path,
    project: &str,
    now: DateTime<Local>,
) -> Result<Vec<ChatRecord>> {
    tracing::info!("Extracting from: {}", path.display());

    let (prompts_raw, generations_raw) = {
        let reader = StateDbReader::open(path)?;
        let prompts_raw = reader
            .value_for_key(PROMPTS_KEY)?
            .ok_or_else(|| AppError::missing_data(PROMPTS_KEY))?;
        let generations_raw = reader
            .value_for_key(GENERATIONS_KEY)?
            .ok_or_else(|| AppError::missing_data(GENERATIONS_KEY))?;
        (prompts_raw, generations_raw)
    };

    let prompts = parse_prompts(&prompts_raw)?;
    let generations = parse_generations(&generations_raw)?;

    tracing::info!(
        "Loaded {} prompts and {} generations",
        prompts.len(),
        generations.len()
    );

    Ok(reconcile(&prompts, &generations, project, now))
}
