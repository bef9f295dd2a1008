//! Grammar registry.
//!
//! Maps a language name to its tree-sitter grammar and the set of node kinds
//! worth reporting. The registry is built eagerly, before any file is parsed.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::languages::{LanguageSupport, builtin_languages};

/// A registered grammar.
#[derive(Debug, Clone)]
pub struct GrammarEntry {
    /// Language name, matched exactly and case-sensitively.
    pub name: String,
    /// Tree-sitter grammar handle.
    pub language: tree_sitter::Language,
    /// File extensions (without the dot) handled by this grammar.
    pub extensions: Vec<String>,
    /// Node kinds reported when found in a tree.
    pub special_node_types: BTreeSet<String>,
}

impl GrammarEntry {
    /// Build an entry from a language support implementation.
    #[must_use]
    pub fn from_support(support: &dyn LanguageSupport) -> Self {
        Self {
            name: support.name().to_string(),
            language: support.tree_sitter_language(),
            extensions: support
                .extensions()
                .iter()
                .map(ToString::to_string)
                .collect(),
            special_node_types: support
                .special_node_kinds()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Ordered collection of grammars, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct GrammarRegistry {
    entries: Vec<GrammarEntry>,
}

impl GrammarRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in language (Python, Rust, JavaScript).
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for support in builtin_languages() {
            registry.register(GrammarEntry::from_support(support));
        }
        registry
    }

    /// Add an entry, replacing any existing entry with the same name.
    pub fn register(&mut self, entry: GrammarEntry) {
        debug!(
            language = %entry.name,
            kinds = entry.special_node_types.len(),
            "Registering grammar"
        );
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Find a grammar by exact, case-sensitive name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&GrammarEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Find a grammar by file extension (case-insensitive, without the dot).
    #[must_use]
    pub fn by_extension(&self, ext: &str) -> Option<&GrammarEntry> {
        let ext = ext.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.extensions.iter().any(|x| *x == ext))
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// All entries in registration order.
    #[must_use]
    pub fn entries(&self) -> &[GrammarEntry] {
        &self.entries
    }

    /// Add extra special node kinds to a registered grammar.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if no grammar is registered under `name`.
    pub fn extend_special_nodes<I, S>(&mut self, name: &str, kinds: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| {
                Error::Config(format!(
                    "cannot extend special nodes: language {name} not registered"
                ))
            })?;
        entry
            .special_node_types
            .extend(kinds.into_iter().map(Into::into));
        Ok(())
    }

    /// Fail if any of `names` has no registered grammar.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` naming every missing language.
    pub fn require<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        let missing: Vec<&str> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| self.lookup(name).is_none())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "required language(s) not registered: {}",
                missing.join(", ")
            )))
        }
    }
}
