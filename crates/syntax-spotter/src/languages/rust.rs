//! Rust language support.

use super::LanguageSupport;

/// Tree-sitter node kind constants for the Rust grammar.
///
/// These match the node types defined in tree-sitter-rust.
mod node_kinds {
    pub const LIFETIME: &str = "lifetime";
    pub const MATCH_EXPRESSION: &str = "match_expression";
    pub const IMPL_ITEM: &str = "impl_item";
}

/// Rust language support implementation.
pub struct RustLanguage;

impl LanguageSupport for RustLanguage {
    fn name(&self) -> &'static str {
        "Rust"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["rs"]
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_rust::LANGUAGE.into()
    }

    fn special_node_kinds(&self) -> &'static [&'static str] {
        &[
            node_kinds::LIFETIME,
            node_kinds::MATCH_EXPRESSION,
            node_kinds::IMPL_ITEM,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::collect_special_nodes;
    use std::collections::BTreeSet;

    fn parse_rust(code: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_rust::LANGUAGE.into())
            .expect("tree-sitter-rust language should be valid");
        parser
            .parse(code, None)
            .expect("parsing test code should succeed")
    }

    fn rust_targets() -> BTreeSet<String> {
        RustLanguage
            .special_node_kinds()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn rust_language_extensions() {
        assert_eq!(RustLanguage.extensions(), &["rs"]);
    }

    #[test]
    fn finds_match_expression() {
        let code = "fn f(x: u8) { match x { 0 => {}, _ => {} } }";
        let tree = parse_rust(code);

        let found = collect_special_nodes(&tree.root_node(), &rust_targets());
        assert_eq!(found, vec![node_kinds::MATCH_EXPRESSION]);
    }

    #[test]
    fn impl_block_is_reported_before_its_body() {
        let code = "struct S; impl S { fn f(&self, x: u8) { match x { _ => {} } } }";
        let tree = parse_rust(code);

        let found = collect_special_nodes(&tree.root_node(), &rust_targets());
        assert_eq!(
            found,
            vec![node_kinds::IMPL_ITEM, node_kinds::MATCH_EXPRESSION]
        );
    }

    #[test]
    fn reports_lifetimes_in_references() {
        let code = "fn first(s: &'static str) -> &'static str { s }";
        let tree = parse_rust(code);

        let found = collect_special_nodes(&tree.root_node(), &rust_targets());
        assert_eq!(found, vec![node_kinds::LIFETIME, node_kinds::LIFETIME]);
    }

    #[test]
    fn plain_function_has_no_special_syntax() {
        let tree = parse_rust("fn add(a: i32, b: i32) -> i32 { a + b }");

        assert!(collect_special_nodes(&tree.root_node(), &rust_targets()).is_empty());
    }
}
