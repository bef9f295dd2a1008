//! Shared tree-sitter utilities.
//!
//! Adapts `tree_sitter::Node` to the walker's `SyntaxNode` capability and
//! provides position helpers for rendering.

use crate::walker::SyntaxNode;

impl SyntaxNode for tree_sitter::Node<'_> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        tree_sitter::Node::children(self, &mut cursor).collect()
    }
}

/// Format a node's range as `[row:col-row:col]`.
///
/// Tree-sitter uses 0-indexed positions; the output is 1-indexed like an editor.
pub fn node_range(node: &tree_sitter::Node) -> String {
    let start = node.start_position();
    let end = node.end_position();
    format!(
        "[{}:{}-{}:{}]",
        start.row + 1,
        start.column + 1,
        end.row + 1,
        end.column + 1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_rust(code: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_rust::LANGUAGE.into())
            .expect("tree-sitter-rust language should be valid");
        parser
            .parse(code, None)
            .expect("parsing test code should succeed")
    }

    #[test]
    fn children_include_anonymous_tokens_in_order() {
        let tree = parse_rust("struct S;");
        let root = tree.root_node();
        let item = SyntaxNode::children(&root).remove(0);

        let kinds: Vec<_> = SyntaxNode::children(&item)
            .iter()
            .map(|c| SyntaxNode::kind(c).to_string())
            .collect();
        assert_eq!(kinds, vec!["struct", "type_identifier", ";"]);
    }

    #[test]
    fn node_range_is_one_indexed() {
        let tree = parse_rust("fn a() {}\nfn b() {}");
        let second = tree
            .root_node()
            .named_child(1)
            .expect("second function should exist");

        assert_eq!(node_range(&second), "[2:1-2:10]");
    }
}
