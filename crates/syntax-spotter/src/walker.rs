//! Special-node collection over syntax trees.
//!
//! The walker visits nodes depth-first in pre-order: a node is recorded before
//! any of its children, and children are visited left to right. Output order is
//! therefore the order in which matching nodes start in the source.
//!
//! Traversal uses an explicit stack, so deeply nested input cannot overflow the
//! call stack.

use std::collections::BTreeSet;

/// A node in a finite, rooted, ordered tree that has a kind.
///
/// Implemented for `tree_sitter::Node`; any tree exposing a kind and ordered
/// children can be walked.
pub trait SyntaxNode: Sized {
    /// Grammar-defined kind of this node.
    fn kind(&self) -> &str;

    /// Children of this node, left to right.
    fn children(&self) -> Vec<Self>;
}

/// Collect the kinds of all nodes in `targets`, in pre-order.
///
/// Duplicates are preserved: each matching node contributes one entry.
pub fn collect_special_nodes<N>(root: &N, targets: &BTreeSet<String>) -> Vec<String>
where
    N: SyntaxNode + Clone,
{
    let mut found = Vec::new();
    if targets.is_empty() {
        return found;
    }

    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        let kind = node.kind();
        if targets.contains(kind) {
            tracing::trace!(node_kind = %kind, "Matched special node");
            found.push(kind.to_string());
        }
        // Reverse so the leftmost child is popped first.
        stack.extend(node.children().into_iter().rev());
    }

    found
}
