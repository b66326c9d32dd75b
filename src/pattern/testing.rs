//! Testing utilities for parse tree assertions
//!
//! This module provides a fluent API for asserting on parse trees, making parser tests
//! more readable.
//!
//! # Example
//!
//! ```ignore
//! use pathglob::pattern::testing::assert_tree;
//!
//! let tree = parse("/src/**").unwrap();
//!
//! assert_tree(&tree)
//!     .kind(RuleKind::Pattern)
//!     .child_count(3)
//!     .child(0, |slash| {
//!         slash.kind(RuleKind::HeadingSlash).text("/");
//!     })
//!     .child(2, |all| {
//!         all.kind(RuleKind::MatchAll).span(5..7);
//!     });
//! ```

use crate::pattern::parser::{ParseNode, ParseTree, RuleKind};
use std::ops::Range;

/// Create an assertion builder for a parse node
pub fn assert_tree(node: &ParseNode) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: node.kind().node_type().to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a ParseNode,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn kind(self, expected: RuleKind) -> Self {
        assert_eq!(
            self.node.kind(),
            expected,
            "{}: expected {} node, found {} with text '{}'",
            self.context,
            expected,
            self.node.kind(),
            self.node.text()
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.text(),
            expected,
            "{}: text mismatch",
            self.context
        );
        self
    }

    pub fn span(self, expected: Range<usize>) -> Self {
        assert_eq!(self.node.span(), expected, "{}: span mismatch", self.context);
        self
    }

    /// Assert the number of nested rule nodes (tokens are not counted)
    pub fn child_count(self, expected: usize) -> Self {
        let kinds: Vec<&str> = self
            .node
            .child_nodes()
            .map(|child| child.kind().node_type())
            .collect();
        assert_eq!(
            kinds.len(),
            expected,
            "{}: expected {} child nodes, found {}: [{}]",
            self.context,
            expected,
            kinds.len(),
            kinds.join(", ")
        );
        self
    }

    /// Assert the number of tokens owned directly by this node
    pub fn token_count(self, expected: usize) -> Self {
        let actual = self.node.tokens().count();
        assert_eq!(
            actual, expected,
            "{}: expected {} tokens, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert on the nested rule node at `index`
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let child = self.node.child_nodes().nth(index).unwrap_or_else(|| {
            panic!(
                "{}: child index {} out of bounds (node has {} child nodes)",
                self.context,
                index,
                self.node.child_nodes().count()
            )
        });
        assertion(NodeAssertion {
            node: child,
            context: format!("{}.{}[{}]", self.context, child.kind(), index),
        });
        self
    }

    /// Assert the tree invariants hold for this node and all descendants
    pub fn consistent(self) -> Self {
        if let Err(message) = check_consistency(self.node) {
            panic!("{}: {}", self.context, message);
        }
        self
    }
}

/// Check that text and spans of `node` agree with its children, recursively
///
/// Children must be contiguous, start where the node starts and end where it ends, and
/// the node text must be their concatenation.
pub fn check_consistency(node: &ParseNode) -> Result<(), String> {
    let mut cursor = node.start();
    let mut text = String::new();

    for child in node.children() {
        let span = child.span();
        if span.start != cursor {
            return Err(format!(
                "{} child at {:?} does not start at {}",
                node.kind(),
                span,
                cursor
            ));
        }
        if span.len() != child.text().len() {
            return Err(format!(
                "{} child at {:?} has text of length {}",
                node.kind(),
                span,
                child.text().len()
            ));
        }
        cursor = span.end;
        text.push_str(child.text());
        if let ParseTree::Node(nested) = child {
            check_consistency(nested)?;
        }
    }

    if !node.children().is_empty() && cursor != node.end() {
        return Err(format!(
            "{} children end at {}, node ends at {}",
            node.kind(),
            cursor,
            node.end()
        ));
    }
    if text != node.text() {
        return Err(format!(
            "{} text {:?} differs from children text {:?}",
            node.kind(),
            node.text(),
            text
        ));
    }
    Ok(())
}
