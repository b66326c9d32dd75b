//! Treeviz formatter for parse trees
//!
//! Prints the rule nodes of a tree as a box-drawing outline, one node per line with its
//! type and (truncated) text. Tokens are not shown.

use crate::pattern::parser::ParseNode;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(pattern: &ParseNode) -> String {
    let mut result = String::new();
    append_children(&mut result, pattern, "");
    result
}

fn append_node(result: &mut String, node: &ParseNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(node.text(), 30);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.kind().node_type(),
        display_label
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, node, &new_prefix);
}

fn append_children(result: &mut String, node: &ParseNode, prefix: &str) {
    let children: Vec<&ParseNode> = node.child_nodes().collect();
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}
