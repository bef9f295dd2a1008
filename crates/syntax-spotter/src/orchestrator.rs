//! Batch processing of parse tasks.
//!
//! Each task is processed independently: resolve the grammar, read the file,
//! parse it and walk the tree. Any failure is logged and recorded as a
//! `TaskError`; the remaining tasks still run. Tasks are processed strictly in
//! the order given.

use tracing::{debug, info};

use crate::error::TaskError;
use crate::parser::{ParseEngine, SourceParser};
use crate::registry::{GrammarEntry, GrammarRegistry};
use crate::types::{ParseOutcome, Task, TaskResult};
use crate::walker::collect_special_nodes;

/// Runs tasks against a grammar registry with a single reusable engine.
pub struct Orchestrator<E = SourceParser> {
    registry: GrammarRegistry,
    engine: E,
}

impl Orchestrator<SourceParser> {
    /// Orchestrator backed by tree-sitter.
    #[must_use]
    pub fn new(registry: GrammarRegistry) -> Self {
        Self::with_engine(registry, SourceParser::new())
    }
}

impl<E: ParseEngine> Orchestrator<E> {
    /// Orchestrator using a custom parse engine.
    pub fn with_engine(registry: GrammarRegistry, engine: E) -> Self {
        Self { registry, engine }
    }

    /// Process every task in order, one result per task.
    pub fn run(&mut self, tasks: &[Task]) -> Vec<TaskResult> {
        info!(tasks = tasks.len(), "Starting run");

        let results: Vec<TaskResult> = tasks
            .iter()
            .map(|task| {
                let result = self.run_one(task);
                if let Err(e) = &result {
                    debug!(
                        path = %e.path.display(),
                        language = %e.language,
                        kind = %e.kind,
                        error = %e.message,
                        "Skipping task"
                    );
                }
                result
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(parsed = results.len() - failed, failed, "Run finished");
        results
    }

    /// Process a single task.
    ///
    /// # Errors
    ///
    /// Returns a `TaskError` if the language is unknown, the file cannot be
    /// read, or the engine produces no tree.
    pub fn run_one(&mut self, task: &Task) -> TaskResult {
        let grammar = Self::resolve_grammar(&self.registry, task)?;
        let language = grammar.name.clone();

        let source = std::fs::read_to_string(&task.path)
            .map_err(|e| TaskError::file_unreadable(&task.path, &language, &e))?;

        debug!(
            path = %task.path.display(),
            language = %language,
            bytes = source.len(),
            "Parsing file"
        );

        let tree = self
            .engine
            .parse(&source, grammar)
            .map_err(|e| TaskError::engine_failure(&task.path, &language, &e))?;

        let special_structures =
            collect_special_nodes(&tree.root_node(), &grammar.special_node_types);
        debug!(
            path = %task.path.display(),
            found = special_structures.len(),
            "Collected special nodes"
        );

        let file_name = task.path.file_name().map_or_else(
            || task.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        Ok(ParseOutcome {
            file_name,
            path: task.path.clone(),
            language,
            tree,
            special_structures,
        })
    }

    fn resolve_grammar<'r>(
        registry: &'r GrammarRegistry,
        task: &Task,
    ) -> Result<&'r GrammarEntry, TaskError> {
        match &task.language {
            Some(name) => registry
                .lookup(name)
                .ok_or_else(|| TaskError::grammar_not_found(&task.path, name)),
            None => {
                let ext = task
                    .path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("");
                registry.by_extension(ext).ok_or_else(|| {
                    TaskError::grammar_not_found(&task.path, &format!("<.{ext}>"))
                })
            }
        }
    }
}
