//! Error types for syntax-spotter operations.
//!
//! Errors are split into two kinds:
//!
//! - **`Error`**: Startup errors that stop the run before any task is processed
//!   (bad configuration, missing required grammar, parser setup)
//! - **`TaskError`**: Per-file errors that are recorded but never halt the batch
//!
//! ## Error Philosophy
//!
//! A single bad task shouldn't prevent the others from running. Task errors are
//! collected alongside successful outcomes and reported at the end; only
//! configuration problems cause early termination.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for syntax-spotter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tree-sitter could not be configured or produced no tree
    #[error("parser error: {0}")]
    Parser(String),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),
}

/// Error encountered while processing a single task.
///
/// These errors are collected per task; the orchestrator continues with the
/// remaining tasks and reports every failure at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskError {
    /// Path of the file the task referred to
    pub path: PathBuf,
    /// Language name the task asked for
    pub language: String,
    /// Category of the error
    pub kind: TaskErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for TaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}]: {} ({})",
            self.path.display(),
            self.language,
            self.message,
            self.kind
        )
    }
}

impl std::error::Error for TaskError {}

/// Categorization of task errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskErrorKind {
    /// The requested language is not in the grammar registry
    GrammarNotFound,

    /// The file does not exist, cannot be read, or is not UTF-8
    FileUnreadable,

    /// Tree-sitter could not produce any tree for the input
    EngineFailure,
}

impl std::fmt::Display for TaskErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GrammarNotFound => write!(f, "grammar not found"),
            Self::FileUnreadable => write!(f, "file unreadable"),
            Self::EngineFailure => write!(f, "engine failure"),
        }
    }
}

impl TaskError {
    /// Create a new task error.
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        language: impl Into<String>,
        kind: TaskErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            language: language.into(),
            kind,
            message: message.into(),
        }
    }

    /// The requested language has no registered grammar.
    #[must_use]
    pub fn grammar_not_found(path: &Path, language: &str) -> Self {
        Self::new(
            path,
            language,
            TaskErrorKind::GrammarNotFound,
            format!("language {language} not found"),
        )
    }

    /// The file could not be read.
    #[must_use]
    pub fn file_unreadable(path: &Path, language: &str, error: &std::io::Error) -> Self {
        Self::new(path, language, TaskErrorKind::FileUnreadable, error.to_string())
    }

    /// Tree-sitter failed to parse the file.
    #[must_use]
    pub fn engine_failure(path: &Path, language: &str, error: &Error) -> Self {
        Self::new(path, language, TaskErrorKind::EngineFailure, error.to_string())
    }

    /// File name component of the path, falling back to the full path.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}
