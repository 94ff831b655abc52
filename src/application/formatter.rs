//! Console and document formatting for export results.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{ChatRecord, ExportStats, WorkspaceStore};

/// Export document format.
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Delimited text with a fixed header.
    #[default]
    Csv,
    /// Human-readable Markdown document.
    Markdown,
}

impl OutputFormat {
    /// File extension used when deriving a default output name.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Markdown => "md",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown format: {s}. Use: csv, markdown")),
        }
    }
}

/// Renders the record sequence as a Markdown document.
#[must_use]
pub fn format_records_markdown(records: &[ChatRecord]) -> String {
    let mut out = String::new();
    out.push_str("# Cursor Chat Records\n\n");

    for record in records {
        out.push_str(&format!(
            "## {} ({})\n\n",
            record.session_id, record.timestamp
        ));
        out.push_str(&format!("**Q:** {}\n\n", record.question));
        out.push_str(&format!("**A:** {}\n\n", record.answer));
        out.push_str("---\n\n");
    }

    out
}

/// Formats export statistics for display.
#[must_use]
pub fn format_stats(stats: &ExportStats) -> String {
    let range = match (&stats.first_timestamp, &stats.last_timestamp) {
        (Some(first), Some(last)) => format!("{first} .. {last}"),
        _ => "-".to_string(),
    };

    format!(
        "{}\n  Records: {}\n  With AI answer: {}\n  Time range: {}",
        "📊 Statistics".bold(),
        stats.total_records.to_string().cyan(),
        stats.answered_records.to_string().green(),
        range.yellow()
    )
}

/// Formats the workspace scan listing as a table.
#[must_use]
pub fn format_workspace_table(stores: &[WorkspaceStore]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Workspace", "Prompts", "Generations", "Path"]);

    for store in stores {
        let workspace = store
            .path
            .parent()
            .and_then(std::path::Path::file_name)
            .map_or_else(|| "-".to_string(), |name| name.to_string_lossy().into_owned());

        table.add_row(vec![
            workspace,
            store.prompt_count.to_string(),
            store.generation_count.to_string(),
            store.path.display().to_string(),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv)));
        assert!(matches!(
            "markdown".parse::<OutputFormat>(),
            Ok(OutputFormat::Markdown)
        ));
        assert!(matches!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown)));
        assert!("invalid".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn markdown_contains_session_and_texts() {
        let records = vec![ChatRecord {
            project: "p".to_string(),
            session_id: "session-001".to_string(),
            timestamp: "2024-05-01 12:00:00".to_string(),
            question: "how?".to_string(),
            answer: "like this".to_string(),
        }];

        let md = format_records_markdown(&records);
        assert!(md.contains("## session-001 (2024-05-01 12:00:00)"));
        assert!(md.contains("**Q:** how?"));
        assert!(md.contains("**A:** like this"));
    }

    #[test]
    fn stats_without_records_show_placeholder_range() {
        let rendered = format_stats(&ExportStats::default());
        assert!(rendered.contains("Records:"));
        assert!(rendered.contains('-'));
    }

    #[test]
    fn workspace_table_lists_directory_names() {
        let stores = vec![WorkspaceStore {
            path: std::path::PathBuf::from("/data/abc123/state.vscdb"),
            prompt_count: 4,
            generation_count: 3,
        }];

        let table = format_workspace_table(&stores);
        assert!(table.contains("abc123"));
        assert!(table.contains('4'));
    }
}
