//! Positional alignment of prompts and generations.
//!
//! Prompts and generations are two independently-indexed arrays in the
//! store; a prompt's generation, when present, lives at the same index.
//! The reconciler flattens the two into one ordered record sequence with
//! derived session identifiers and human-readable timestamps.

use chrono::{DateTime, Local, TimeZone};

use crate::domain::{ChatRecord, GenerationItem, PromptItem, PENDING_ANSWER, UNKNOWN_TIME};

/// Wall-clock format used for all record timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Aligns prompts and generations by index into flat records.
///
/// Prompts beyond the end of the generations array are still emitted with
/// a pending-answer placeholder and `now` as their timestamp; injecting the
/// clock keeps reruns reproducible. Prompts whose text trims to empty are
/// dropped. Output order follows source index order.
#[must_use]
pub fn reconcile(
    prompts: &[PromptItem],
    generations: &[GenerationItem],
    project: &str,
    now: DateTime<Local>,
) -> Vec<ChatRecord> {
    let mut records = Vec::with_capacity(prompts.len());

    for (i, prompt) in prompts.iter().enumerate() {
        let question = prompt.text.trim();
        if question.is_empty() {
            continue;
        }

        let (timestamp, answer) = match generations.get(i) {
            Some(generation) => (format_generation_time(generation), generation.answer_text()),
            None => (
                now.format(TIMESTAMP_FORMAT).to_string(),
                PENDING_ANSWER.to_string(),
            ),
        };

        records.push(ChatRecord {
            project: project.to_string(),
            session_id: session_id(i),
            timestamp,
            question: question.to_string(),
            answer,
        });
    }

    records
}

/// Derives the session identifier from the source array index.
fn session_id(index: usize) -> String {
    format!("session-{:03}", index + 1)
}

/// Formats a generation's `unixMs` as local time, or the unknown-time
/// placeholder when it is absent or out of range.
fn format_generation_time(generation: &GenerationItem) -> String {
    generation
        .unix_ms
        .and_then(|ms| Local.timestamp_millis_opt(ms).single())
        .map_or_else(
            || UNKNOWN_TIME.to_string(),
            |dt| dt.format(TIMESTAMP_FORMAT).to_string(),
        )
}
