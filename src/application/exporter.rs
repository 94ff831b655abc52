//! CSV rendering and file output.
//!
//! The column labels match the export the original tooling produced, so
//! spreadsheets consuming the old files keep working.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{AppError, ChatRecord, Result};

/// Fixed CSV column header.
const CSV_HEADER: &str = "项目,会话ID,时间,Q,A";

/// Renders records as a CSV document with a fixed header row.
#[must_use]
pub fn render_csv(records: &[ChatRecord]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        let fields = [
            &record.project,
            &record.session_id,
            &record.timestamp,
            &record.question,
            &record.answer,
        ];
        let row: Vec<String> = fields.iter().map(|field| csv_escape(field)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Quotes a field containing the delimiter, quotes, or line breaks;
/// embedded quotes are doubled.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Writes rendered export content to `path`, replacing any existing file.
///
/// # Errors
/// Returns error if the file cannot be created or written.
pub fn write_export(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create {}", path.display()), e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| AppError::io(format!("Failed to write {}", path.display()), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(question: &str, answer: &str) -> ChatRecord {
        ChatRecord {
            project: "cursor-chat-memory".to_string(),
            session_id: "session-001".to_string(),
            timestamp: "2024-05-01 12:00:00".to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn csv_escape_plain() {
        assert_eq!(csv_escape("hello"), "hello");
    }

    #[test]
    fn csv_escape_comma() {
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
    }

    #[test]
    fn csv_escape_quotes() {
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_escape_newline() {
        assert_eq!(csv_escape("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn empty_records_render_header_only() {
        assert_eq!(render_csv(&[]), "项目,会话ID,时间,Q,A\n");
    }

    #[test]
    fn rows_follow_column_order() {
        let csv = render_csv(&[record("how?", "like this")]);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "cursor-chat-memory,session-001,2024-05-01 12:00:00,how?,like this"
        );
    }

    #[test]
    fn multiline_answer_stays_one_logical_row() {
        let csv = render_csv(&[record("q", "step 1\nstep 2")]);
        assert!(csv.contains("\"step 1\nstep 2\""));
    }

    #[test]
    fn write_export_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        std::fs::write(&path, "old content").unwrap();
        write_export(&path, "new content").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new content");
    }
}
