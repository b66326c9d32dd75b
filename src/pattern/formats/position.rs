//! Position-based lookup for parse tree nodes
//!
//! This module finds and displays the rule nodes covering a given byte offset of the
//! pattern source.

use crate::pattern::parser::ParseNode;
use crate::pattern::processor::ProcessingError;

/// All rule nodes whose span contains `offset`, outermost first
///
/// The root is included for any offset inside the pattern. An offset at or past the end
/// of the input matches nothing.
pub fn nodes_at(pattern: &ParseNode, offset: usize) -> Vec<&ParseNode> {
    let mut nodes = Vec::new();
    if pattern.span().contains(&offset) {
        collect_nodes_at(pattern, offset, &mut nodes);
    }
    nodes
}

fn collect_nodes_at<'a>(node: &'a ParseNode, offset: usize, nodes: &mut Vec<&'a ParseNode>) {
    nodes.push(node);
    if let Some(child) = node
        .child_nodes()
        .find(|child| child.span().contains(&offset))
    {
        collect_nodes_at(child, offset, nodes);
    }
}

/// Format the node hierarchy at the given offset
pub fn format_at_position(pattern: &ParseNode, offset: usize) -> Result<String, ProcessingError> {
    let nodes = nodes_at(pattern, offset);
    if nodes.is_empty() {
        return Err(ProcessingError::NoNodeAtPosition(offset));
    }

    let mut result = String::new();
    for (i, node) in nodes.iter().enumerate() {
        let span = node.span();
        result.push_str(&format!(
            "{}. {} [{}..{}): {}\n",
            i + 1,
            node.kind().node_type(),
            span.start,
            span.end,
            node.text()
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parser::{parse, RuleKind};

    #[test]
    fn test_nodes_at_nested_offset() {
        let tree = parse("a[b\\]c]").unwrap();
        let kinds: Vec<RuleKind> = nodes_at(&tree, 3).iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                RuleKind::Pattern,
                RuleKind::CharClass,
                RuleKind::CharClassBody,
                RuleKind::EscapedCharClassEnd
            ]
        );
    }

    #[test]
    fn test_nodes_at_class_bracket() {
        // The opening bracket is a token of the class itself, not of its body
        let tree = parse("a[b]").unwrap();
        let kinds: Vec<RuleKind> = nodes_at(&tree, 1).iter().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec![RuleKind::Pattern, RuleKind::CharClass]);
    }

    #[test]
    fn test_out_of_range() {
        let tree = parse("ab").unwrap();
        assert!(nodes_at(&tree, 2).is_empty());
        assert!(format_at_position(&tree, 2).is_err());
    }

    #[test]
    fn test_format_at_position() {
        let tree = parse("/ab*").unwrap();
        assert_eq!(
            format_at_position(&tree, 2).unwrap(),
            "1. Pattern [0..4): /ab*\n2. Text [1..3): ab\n"
        );
    }
}
