//! Domain models for Cursor chat export.
//!
//! These models represent the raw items read from Cursor's `ItemTable`
//! key-value store and the flat records produced for export. Prompts and
//! generations are associated purely by array index; there is no foreign
//! key in the store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Project label stamped on every record unless overridden in config.
pub const DEFAULT_PROJECT_LABEL: &str = "cursor-chat-memory";

/// Timestamp placeholder for a generation without a usable `unixMs`.
pub const UNKNOWN_TIME: &str = "未知时间";

/// Answer placeholder for a generation that carries no text at all.
pub const NO_ANSWER: &str = "[无AI回答]";

/// Answer placeholder for a prompt that has no generation yet.
pub const PENDING_ANSWER: &str = "[待AI回答]";

/// One user-submitted query, as stored in `aiService.prompts`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PromptItem {
    /// The query text. May be empty or absent in the store.
    #[serde(default)]
    pub text: String,
}

/// One generated response, as stored in `aiService.generations`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationItem {
    /// Creation time in epoch milliseconds.
    #[serde(default)]
    pub unix_ms: Option<i64>,
    /// Short description of the generated response.
    #[serde(default)]
    pub text_description: Option<String>,
    /// Full text of the generated response.
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerationItem {
    /// Best available answer text: prefers the description, falls back to
    /// the full text, and substitutes the placeholder when both are empty.
    #[must_use]
    pub fn answer_text(&self) -> String {
        [&self.text_description, &self.text]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .map_or_else(|| NO_ANSWER.to_string(), Clone::clone)
    }
}

/// One flat, aligned Q&A record ready for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRecord {
    /// Project label.
    pub project: String,
    /// Derived identifier, `session-NNN` from the source index.
    pub session_id: String,
    /// Formatted local time, or a placeholder.
    pub timestamp: String,
    /// The prompt text, trimmed.
    pub question: String,
    /// The generation text, or a placeholder.
    pub answer: String,
}

/// A candidate store found while scanning workspace directories.
#[derive(Debug, Clone)]
pub struct WorkspaceStore {
    /// Path to the `state.vscdb` file.
    pub path: PathBuf,
    /// Rows stored under the prompts key.
    pub prompt_count: i64,
    /// Rows stored under the generations key.
    pub generation_count: i64,
}

/// Summary statistics for an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportStats {
    /// Number of records written.
    pub total_records: usize,
    /// Records whose answer is not the no-answer placeholder.
    pub answered_records: usize,
    /// Timestamp of the first record, in output order.
    pub first_timestamp: Option<String>,
    /// Timestamp of the last record, in output order.
    pub last_timestamp: Option<String>,
}

impl ExportStats {
    /// Computes summary statistics over a record sequence.
    #[must_use]
    pub fn from_records(records: &[ChatRecord]) -> Self {
        Self {
            total_records: records.len(),
            answered_records: records.iter().filter(|r| r.answer != NO_ANSWER).count(),
            first_timestamp: records.first().map(|r| r.timestamp.clone()),
            last_timestamp: records.last().map(|r| r.timestamp.clone()),
        }
    }
}
