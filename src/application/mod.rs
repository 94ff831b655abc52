//! Application layer - use cases and orchestration.
//!
//! This layer contains the main business logic for extracting,
//! reconciling, and exporting chat data.

pub mod exporter;
pub mod extractor;
pub mod formatter;
pub mod parser;
pub mod reconciler;

pub use exporter::{render_csv, write_export};
pub use extractor::extract_from_store;
pub use formatter::{
    format_records_markdown, format_stats, format_workspace_table, OutputFormat,
};
pub use reconciler::reconcile;
