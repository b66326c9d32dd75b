//! XML-like tag serialization
//!
//! Serializes a parse tree to an XML-like format that directly reflects its structure.
//! The serializer is a [`PatternListener`], so it follows the same traversal as any
//! other consumer of the tree.
//!
//! ## Format
//!
//! - Rule kind → tag name
//! - Leaf rules (rules wrapping only tokens) → a single line with their text
//! - Other rules → an opening line, their children one level deeper, a closing line
//! - Tokens inside non-leaf rules → a line tagged with the token kind
//!
//! ## Example
//!
//! ```text
//! <pattern>
//!   <heading-slash>/</heading-slash>
//!   <char-class>
//!     <char-class-start>[</char-class-start>
//!     <char-class-body>
//!       <any>a</any>
//!       <escaped-char-class-end>\]</escaped-char-class-end>
//!     </char-class-body>
//!     <char-class-end>]</char-class-end>
//!   </char-class>
//! </pattern>
//! ```

use crate::pattern::lexer::Token;
use crate::pattern::parser::{ParseNode, PatternListener};

/// Serialize a pattern tree to tag format
pub fn serialize_tag(pattern: &ParseNode) -> String {
    let mut serializer = TagSerializer::default();
    pattern.accept(&mut serializer);
    serializer.output
}

#[derive(Default)]
struct TagSerializer {
    output: String,
    // One entry per open rule: whether it was printed as a single leaf line
    leaf_stack: Vec<bool>,
}

impl TagSerializer {
    fn indent(&self) -> String {
        "  ".repeat(self.leaf_stack.len())
    }

    fn inside_leaf(&self) -> bool {
        self.leaf_stack.last().copied().unwrap_or(false)
    }
}

impl PatternListener for TagSerializer {
    fn enter_every_rule(&mut self, node: &ParseNode) {
        let indent = self.indent();
        let tag = node.kind().tag_name();
        if node.is_leaf_rule() {
            self.output.push_str(&format!(
                "{}<{}>{}</{}>\n",
                indent,
                tag,
                escape_xml(node.text()),
                tag
            ));
            self.leaf_stack.push(true);
        } else {
            self.output.push_str(&format!("{}<{}>\n", indent, tag));
            self.leaf_stack.push(false);
        }
    }

    fn exit_every_rule(&mut self, node: &ParseNode) {
        let was_leaf = self.leaf_stack.pop().unwrap_or(true);
        if !was_leaf {
            let indent = self.indent();
            self.output
                .push_str(&format!("{}</{}>\n", indent, node.kind().tag_name()));
        }
    }

    fn visit_token(&mut self, token: &Token) {
        if self.inside_leaf() {
            return;
        }
        let indent = self.indent();
        let tag = token.kind.name();
        self.output.push_str(&format!(
            "{}<{}>{}</{}>\n",
            indent,
            tag,
            escape_xml(&token.text),
            tag
        ));
    }
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parser::parse;

    #[test]
    fn test_flat_pattern() {
        let tree = parse("/a?").unwrap();
        assert_eq!(
            serialize_tag(&tree),
            "<pattern>\n  <heading-slash>/</heading-slash>\n  <text>a</text>\n  <match-one>?</match-one>\n</pattern>\n"
        );
    }

    #[test]
    fn test_char_class() {
        let tree = parse("[a\\]]").unwrap();
        let expected = [
            "<pattern>",
            "  <char-class>",
            "    <char-class-start>[</char-class-start>",
            "    <char-class-body>",
            "      <any>a</any>",
            "      <escaped-char-class-end>\\]</escaped-char-class-end>",
            "    </char-class-body>",
            "    <char-class-end>]</char-class-end>",
            "  </char-class>",
            "</pattern>",
            "",
        ]
        .join("\n");
        assert_eq!(serialize_tag(&tree), expected);
    }

    #[test]
    fn test_empty_pattern() {
        let tree = parse("").unwrap();
        assert_eq!(serialize_tag(&tree), "<pattern></pattern>\n");
    }

    #[test]
    fn test_escaping() {
        let tree = parse("a<b>&").unwrap();
        assert_eq!(
            serialize_tag(&tree),
            "<pattern>\n  <text>a&lt;b&gt;&amp;</text>\n</pattern>\n"
        );
    }
}
