//! Parse tree definitions for glob patterns
//!
//! The tree is a concrete syntax tree: every input character is reachable through it.
//! Rule nodes ([`ParseNode`]) own their children, which are either nested rule nodes or
//! the tokens the rule consumed ([`ParseTree`]).
//!
//! Two invariants hold for every tree the parser returns:
//!
//! - a node's `text` is the concatenation of its children's text, in order;
//! - the root `Pattern` node spans the whole input.

use crate::pattern::lexer::Token;
use crate::pattern::parser::listener::{walk, PatternListener};
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// The closed set of grammar rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleKind {
    Pattern,
    HeadingSlash,
    Text,
    MatchAll,
    MatchMultiple,
    MatchOne,
    SimpleEscape,
    EscapedAsterisk,
    EscapedQuestionMark,
    EscapedCharClassStart,
    CharClass,
    CharClassBody,
    EscapedCharClassEnd,
}

impl RuleKind {
    pub const ALL: [RuleKind; 13] = [
        RuleKind::Pattern,
        RuleKind::HeadingSlash,
        RuleKind::Text,
        RuleKind::MatchAll,
        RuleKind::MatchMultiple,
        RuleKind::MatchOne,
        RuleKind::SimpleEscape,
        RuleKind::EscapedAsterisk,
        RuleKind::EscapedQuestionMark,
        RuleKind::EscapedCharClassStart,
        RuleKind::CharClass,
        RuleKind::CharClassBody,
        RuleKind::EscapedCharClassEnd,
    ];

    /// Node type name for display/debugging
    pub fn node_type(&self) -> &'static str {
        match self {
            RuleKind::Pattern => "Pattern",
            RuleKind::HeadingSlash => "HeadingSlash",
            RuleKind::Text => "Text",
            RuleKind::MatchAll => "MatchAll",
            RuleKind::MatchMultiple => "MatchMultiple",
            RuleKind::MatchOne => "MatchOne",
            RuleKind::SimpleEscape => "SimpleEscape",
            RuleKind::EscapedAsterisk => "EscapedAsterisk",
            RuleKind::EscapedQuestionMark => "EscapedQuestionMark",
            RuleKind::EscapedCharClassStart => "EscapedCharClassStart",
            RuleKind::CharClass => "CharClass",
            RuleKind::CharClassBody => "CharClassBody",
            RuleKind::EscapedCharClassEnd => "EscapedCharClassEnd",
        }
    }

    /// Kebab-case name, used as the tag name by the tag serializer
    pub fn tag_name(&self) -> &'static str {
        match self {
            RuleKind::Pattern => "pattern",
            RuleKind::HeadingSlash => "heading-slash",
            RuleKind::Text => "text",
            RuleKind::MatchAll => "match-all",
            RuleKind::MatchMultiple => "match-multiple",
            RuleKind::MatchOne => "match-one",
            RuleKind::SimpleEscape => "simple-escape",
            RuleKind::EscapedAsterisk => "escaped-asterisk",
            RuleKind::EscapedQuestionMark => "escaped-question-mark",
            RuleKind::EscapedCharClassStart => "escaped-char-class-start",
            RuleKind::CharClass => "char-class",
            RuleKind::CharClassBody => "char-class-body",
            RuleKind::EscapedCharClassEnd => "escaped-char-class-end",
        }
    }

    /// Whether a node of this kind can appear as a top-level segment of a pattern
    pub fn is_segment(&self) -> bool {
        !matches!(
            self,
            RuleKind::Pattern
                | RuleKind::HeadingSlash
                | RuleKind::CharClassBody
                | RuleKind::EscapedCharClassEnd
        )
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node_type())
    }
}

/// A child of a rule node: either a nested rule or a consumed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseTree {
    Node(ParseNode),
    Token(Token),
}

impl ParseTree {
    pub fn text(&self) -> &str {
        match self {
            ParseTree::Node(node) => node.text(),
            ParseTree::Token(token) => &token.text,
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            ParseTree::Node(node) => node.span(),
            ParseTree::Token(token) => token.span(),
        }
    }

    pub fn as_node(&self) -> Option<&ParseNode> {
        match self {
            ParseTree::Node(node) => Some(node),
            ParseTree::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            ParseTree::Node(_) => None,
            ParseTree::Token(token) => Some(token),
        }
    }
}

impl From<ParseNode> for ParseTree {
    fn from(node: ParseNode) -> Self {
        ParseTree::Node(node)
    }
}

impl From<Token> for ParseTree {
    fn from(token: Token) -> Self {
        ParseTree::Token(token)
    }
}

/// A rule node of the parse tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseNode {
    kind: RuleKind,
    span: Range<usize>,
    text: String,
    children: Vec<ParseTree>,
}

impl ParseNode {
    /// Build a node from its children. Span and text are derived from them; a node
    /// without children is empty at `fallback_start`.
    pub fn new(kind: RuleKind, children: Vec<ParseTree>, fallback_start: usize) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => first.span().start..last.span().end,
            _ => fallback_start..fallback_start,
        };
        let text = children.iter().map(ParseTree::text).collect();
        ParseNode {
            kind,
            span,
            text,
            children,
        }
    }

    /// A node wrapping consumed tokens only
    pub fn from_tokens(kind: RuleKind, tokens: Vec<Token>) -> Self {
        let start = tokens.first().map_or(0, |token| token.start);
        ParseNode::new(kind, tokens.into_iter().map(ParseTree::Token).collect(), start)
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[ParseTree] {
        &self.children
    }

    /// Nested rule nodes, skipping token children
    pub fn child_nodes(&self) -> impl Iterator<Item = &ParseNode> {
        self.children.iter().filter_map(ParseTree::as_node)
    }

    /// Tokens directly owned by this node
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.children.iter().filter_map(ParseTree::as_token)
    }

    /// Top-level segments of a `Pattern` node (everything but the heading slash)
    pub fn segments(&self) -> impl Iterator<Item = &ParseNode> {
        self.child_nodes().filter(|node| node.kind.is_segment())
    }

    /// Whether the pattern is anchored with a heading slash
    pub fn has_heading_slash(&self) -> bool {
        self.child_nodes()
            .any(|node| node.kind == RuleKind::HeadingSlash)
    }

    /// A rule is a leaf rule when it only wraps tokens
    pub fn is_leaf_rule(&self) -> bool {
        self.child_nodes().next().is_none()
    }

    /// Concatenated text of every token under this node, in order
    pub fn leaf_text(&self) -> String {
        let mut result = String::new();
        collect_leaf_text(self, &mut result);
        result
    }

    /// Run a listener over this node and its descendants
    pub fn accept(&self, listener: &mut dyn PatternListener) {
        walk(listener, self);
    }
}

fn collect_leaf_text(node: &ParseNode, output: &mut String) {
    for child in &node.children {
        match child {
            ParseTree::Node(nested) => collect_leaf_text(nested, output),
            ParseTree::Token(token) => output.push_str(&token.text),
        }
    }
}
