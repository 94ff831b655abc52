//! JSON parsing for the store's chat arrays.
//!
//! Handles conversion from raw `ItemTable` values to domain models.

use crate::domain::{AppError, GenerationItem, PromptItem, Result};

/// Parses the prompts value as a JSON array.
///
/// # Errors
/// Returns error if the value is not a JSON array of prompt objects.
pub fn parse_prompts(raw: &str) -> Result<Vec<PromptItem>> {
    serde_json::from_str(raw).map_err(AppError::json_parse)
}

/// Parses the generations value as a JSON array.
///
/// # Errors
/// Returns error if the value is not a JSON array of generation objects.
pub fn parse_generations(raw: &str) -> Result<Vec<GenerationItem>> {
    serde_json::from_str(raw).map_err(AppError::json_parse)
}
