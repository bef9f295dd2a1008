//! Built-in language support.
//!
//! Each supported language implements the `LanguageSupport` trait, which names
//! the language, its tree-sitter grammar, and the node kinds that are notable
//! for it. The grammar registry is assembled from these implementations.
//!
//! ## Adding a New Language
//!
//! 1. Create a new module (e.g., `go.rs`) with its node kind constants
//! 2. Implement `LanguageSupport`
//! 3. Add it to `builtin_languages()`

pub mod javascript;
pub mod python;
pub mod rust;

pub(crate) mod tree_sitter_utils;

/// All languages compiled into the binary, in registration order.
#[must_use]
pub fn builtin_languages() -> [&'static dyn LanguageSupport; 3] {
    [
        &python::PythonLanguage,
        &rust::RustLanguage,
        &javascript::JavaScriptLanguage,
    ]
}

/// Trait for a language the registry can be built from.
pub trait LanguageSupport: Send + Sync {
    /// Display name used to look the language up (case-sensitive).
    fn name(&self) -> &'static str;

    /// File extensions this language handles.
    fn extensions(&self) -> &'static [&'static str];

    /// Get the tree-sitter language for parsing.
    fn tree_sitter_language(&self) -> tree_sitter::Language;

    /// Node kinds worth reporting for this language.
    fn special_node_kinds(&self) -> &'static [&'static str];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_unique() {
        let mut names: Vec<_> = builtin_languages().iter().map(|l| l.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn every_special_kind_exists_in_its_grammar() {
        for lang in builtin_languages() {
            let ts_lang = lang.tree_sitter_language();
            for kind in lang.special_node_kinds() {
                assert_ne!(
                    ts_lang.id_for_node_kind(kind, true),
                    0,
                    "{} grammar has no named node kind {kind}",
                    lang.name()
                );
            }
        }
    }
}
