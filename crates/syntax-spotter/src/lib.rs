//! # syntax-spotter: language-specific syntax detection with tree-sitter
//!
//! syntax-spotter parses source files with tree-sitter grammars and reports
//! which "special" node kinds (decorators, pattern matches, arrow functions,
//! ...) each file contains. Parsing is delegated entirely to tree-sitter; this
//! crate owns the grammar registry, the pre-order walk and the per-file
//! failure isolation around them.
//!
//! ## Quick Start
//!
//! ```no_run
//! use syntax_spotter::{GrammarRegistry, Orchestrator, Task};
//!
//! let mut orchestrator = Orchestrator::new(GrammarRegistry::builtin());
//! let results = orchestrator.run(&[
//!     Task::new("samples/example.py", "Python"),
//!     Task::new("samples/example.js", "JavaScript"),
//! ]);
//!
//! for result in &results {
//!     match result {
//!         Ok(outcome) => println!("{}: {:?}", outcome.file_name, outcome.special_structures),
//!         Err(e) => eprintln!("skipped: {e}"),
//!     }
//! }
//! ```

mod config;
mod error;
mod orchestrator;
mod parser;
mod registry;
mod types;

pub mod languages;
pub mod report;
pub mod walker;

pub use config::{Config, DEFAULT_SAMPLES_DIR, TaskConfig};
pub use error::{Error, Result, TaskError, TaskErrorKind};
pub use orchestrator::Orchestrator;
pub use parser::{ParseEngine, SourceParser};
pub use registry::{GrammarEntry, GrammarRegistry};
pub use types::{ParseOutcome, RunSummary, Task, TaskResult};
pub use walker::{SyntaxNode, collect_special_nodes};
