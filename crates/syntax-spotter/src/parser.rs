//! Tree-sitter parsing coordination.
//!
//! The parser is stateful: a single `tree_sitter::Parser` is reused across
//! tasks, so its language must be set immediately before every parse.
//!
//! Trees containing `ERROR` or missing nodes are returned as-is; only the
//! absence of a tree counts as a failure.

use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::GrammarEntry;

/// Something that can turn source text into a syntax tree for a grammar.
pub trait ParseEngine {
    /// Parse `source` with the grammar of `grammar`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parser` if the engine produced no tree at all.
    fn parse(&mut self, source: &str, grammar: &GrammarEntry) -> Result<tree_sitter::Tree>;
}

/// Tree-sitter backed parse engine.
pub struct SourceParser {
    parser: tree_sitter::Parser,
}

impl SourceParser {
    /// Create a parser with no language set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: tree_sitter::Parser::new(),
        }
    }
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseEngine for SourceParser {
    fn parse(&mut self, source: &str, grammar: &GrammarEntry) -> Result<tree_sitter::Tree> {
        self.parser
            .set_language(&grammar.language)
            .map_err(|e| Error::Parser(format!("cannot load {} grammar: {e}", grammar.name)))?;

        let tree = self.parser.parse(source, None).ok_or_else(|| {
            Error::Parser(format!("tree-sitter produced no tree for {}", grammar.name))
        })?;

        if tree.root_node().has_error() {
            debug!(
                language = %grammar.name,
                "Syntax tree contains error nodes"
            );
        }

        Ok(tree)
    }
}
