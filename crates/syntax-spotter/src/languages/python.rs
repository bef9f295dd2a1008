//! Python language support.

use super::LanguageSupport;

/// Tree-sitter node kind constants for the Python grammar.
mod node_kinds {
    pub const DECORATOR: &str = "decorator";
    pub const LIST_COMPREHENSION: &str = "list_comprehension";
    pub const WITH_STATEMENT: &str = "with_statement";
}

/// Python language support implementation.
pub struct PythonLanguage;

impl LanguageSupport for PythonLanguage {
    fn name(&self) -> &'static str {
        "Python"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["py", "pyi"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    fn special_node_kinds(&self) -> &'static [&'static str] {
        &[
            node_kinds::DECORATOR,
            node_kinds::LIST_COMPREHENSION,
            node_kinds::WITH_STATEMENT,
        ]
    }
}
