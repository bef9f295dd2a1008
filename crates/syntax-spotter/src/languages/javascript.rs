//! JavaScript language support.

use super::LanguageSupport;

/// Tree-sitter node kind constants for the JavaScript grammar.
mod node_kinds {
    pub const ARROW_FUNCTION: &str = "arrow_function";
    pub const AWAIT_EXPRESSION: &str = "await_expression";
    pub const OBJECT_PATTERN: &str = "object_pattern";
}

/// JavaScript language support implementation.
pub struct JavaScriptLanguage;

impl LanguageSupport for JavaScriptLanguage {
    fn name(&self) -> &'static str {
        "JavaScript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["js", "mjs", "cjs", "jsx"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_javascript::LANGUAGE.into()
    }

    fn special_node_kinds(&self) -> &'static [&'static str] {
        &[
            node_kinds::ARROW_FUNCTION,
            node_kinds::AWAIT_EXPRESSION,
            node_kinds::OBJECT_PATTERN,
        ]
    }
}
