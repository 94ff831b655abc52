//! Domain layer - core business logic and types.
//!
//! This layer contains pure domain models and error types
//! without any external dependencies (DB, IO, etc.).

pub mod config;
pub mod error;
pub mod models;

pub use config::{AppConfig, ExportConfig, PathsConfig};
pub use error::{AppError, Result};
pub use models::{
    ChatRecord, ExportStats, GenerationItem, PromptItem, WorkspaceStore, DEFAULT_PROJECT_LABEL,
    NO_ANSWER, PENDING_ANSWER, UNKNOWN_TIME,
};
