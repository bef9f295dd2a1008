//! Domain types for a spotting run.
//!
//! - **Input**: `Task` (a file and the language to parse it as)
//! - **Transient**: `ParseOutcome` (per-file result, dropped after reporting)
//! - **Results**: `TaskResult`, `RunSummary`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::TaskError;

/// A file to parse and the language to parse it as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Path to the source file.
    pub path: PathBuf,
    /// Registered language name. `None` picks the grammar from the extension.
    pub language: Option<String>,
}

impl Task {
    /// A task with an explicit language.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language: Some(language.into()),
        }
    }

    /// A task whose language is detected from the file extension.
    #[must_use]
    pub fn detect(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            language: None,
        }
    }

    /// Resolve a relative path against `base`; absolute paths are kept.
    #[must_use]
    pub fn resolved_against(mut self, base: &Path) -> Self {
        if self.path.is_relative() {
            self.path = base.join(&self.path);
        }
        self
    }

    /// Parse a `PATH[=LANGUAGE]` command-line argument.
    ///
    /// Only the text after the last `=` can be a language, and only when it
    /// looks like a name: a suffix containing `.`, `/` or `\` is part of the
    /// path, so `a=b.py` is a file whose language is detected.
    ///
    /// # Errors
    ///
    /// Returns a message if the path or the language part is empty.
    pub fn parse_arg(arg: &str) -> Result<Self, String> {
        match arg.rsplit_once('=') {
            Some((_, suffix)) if suffix.contains(['.', '/', '\\']) => Ok(Self::detect(arg)),
            Some((path, language)) => {
                if path.is_empty() || language.is_empty() {
                    Err(format!("invalid task '{arg}': expected PATH[=LANGUAGE]"))
                } else {
                    Ok(Self::new(path, language))
                }
            }
            None if arg.is_empty() => Err("task path cannot be empty".to_string()),
            None => Ok(Self::detect(arg)),
        }
    }
}

/// Result of successfully processing one task.
#[derive(Debug)]
pub struct ParseOutcome {
    /// File name component of the parsed path.
    pub file_name: String,
    /// Full path that was parsed.
    pub path: PathBuf,
    /// Language the file was parsed as.
    pub language: String,
    /// The parsed syntax tree.
    pub tree: tree_sitter::Tree,
    /// Kinds of special nodes, in pre-order.
    pub special_structures: Vec<String>,
}

impl ParseOutcome {
    /// Root node of the parsed tree.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Occurrences of each special kind.
    #[must_use]
    pub fn special_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for kind in &self.special_structures {
            *counts.entry(kind.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// Outcome of one task: parsed, or skipped with a reason.
pub type TaskResult = std::result::Result<ParseOutcome, TaskError>;

/// Totals over a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tasks that produced a `ParseOutcome`.
    pub files_parsed: usize,
    /// Tasks that failed.
    pub files_failed: usize,
    /// Special nodes found across all parsed files.
    pub special_nodes_found: usize,
}

impl RunSummary {
    /// Tally a slice of task results.
    #[must_use]
    pub fn from_results(results: &[TaskResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            match result {
                Ok(outcome) => {
                    summary.files_parsed += 1;
                    summary.special_nodes_found += outcome.special_structures.len();
                }
                Err(_) => summary.files_failed += 1,
            }
            summary
        })
    }
}
