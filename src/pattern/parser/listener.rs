//! Listener protocol for walking parse trees
//!
//! Implement [`PatternListener`] to observe a tree. Each rule kind has an `enter_*` and
//! an `exit_*` method; default implementations are empty, so you only override the ones
//! you care about.
//!
//! [`walk`] performs a depth-first traversal. For every rule node it calls
//! `enter_every_rule`, then the node's `enter_*` method, then visits the children left
//! to right (tokens go to `visit_token`), then the node's `exit_*` method and finally
//! `exit_every_rule`.
//!
//! # Example
//!
//! ```ignore
//! struct WildcardCounter(usize);
//!
//! impl PatternListener for WildcardCounter {
//!     fn enter_match_all(&mut self, _node: &ParseNode) {
//!         self.0 += 1;
//!     }
//!     fn enter_match_multiple(&mut self, _node: &ParseNode) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut counter = WildcardCounter(0);
//! tree.accept(&mut counter);
//! ```

use crate::pattern::lexer::Token;
use crate::pattern::parser::ast::{ParseNode, ParseTree, RuleKind};

pub trait PatternListener {
    // Generic hooks, called around the rule-specific ones
    fn enter_every_rule(&mut self, _node: &ParseNode) {}
    fn exit_every_rule(&mut self, _node: &ParseNode) {}
    fn visit_token(&mut self, _token: &Token) {}

    fn enter_pattern(&mut self, _node: &ParseNode) {}
    fn exit_pattern(&mut self, _node: &ParseNode) {}

    fn enter_heading_slash(&mut self, _node: &ParseNode) {}
    fn exit_heading_slash(&mut self, _node: &ParseNode) {}

    fn enter_text(&mut self, _node: &ParseNode) {}
    fn exit_text(&mut self, _node: &ParseNode) {}

    // Wildcards
    fn enter_match_all(&mut self, _node: &ParseNode) {}
    fn exit_match_all(&mut self, _node: &ParseNode) {}
    fn enter_match_multiple(&mut self, _node: &ParseNode) {}
    fn exit_match_multiple(&mut self, _node: &ParseNode) {}
    fn enter_match_one(&mut self, _node: &ParseNode) {}
    fn exit_match_one(&mut self, _node: &ParseNode) {}

    // Escapes
    fn enter_simple_escape(&mut self, _node: &ParseNode) {}
    fn exit_simple_escape(&mut self, _node: &ParseNode) {}
    fn enter_escaped_asterisk(&mut self, _node: &ParseNode) {}
    fn exit_escaped_asterisk(&mut self, _node: &ParseNode) {}
    fn enter_escaped_question_mark(&mut self, _node: &ParseNode) {}
    fn exit_escaped_question_mark(&mut self, _node: &ParseNode) {}
    fn enter_escaped_char_class_start(&mut self, _node: &ParseNode) {}
    fn exit_escaped_char_class_start(&mut self, _node: &ParseNode) {}

    // Character classes
    fn enter_char_class(&mut self, _node: &ParseNode) {}
    fn exit_char_class(&mut self, _node: &ParseNode) {}
    fn enter_char_class_body(&mut self, _node: &ParseNode) {}
    fn exit_char_class_body(&mut self, _node: &ParseNode) {}
    fn enter_escaped_char_class_end(&mut self, _node: &ParseNode) {}
    fn exit_escaped_char_class_end(&mut self, _node: &ParseNode) {}
}

/// Walk `node` and all its descendants depth first
pub fn walk(listener: &mut dyn PatternListener, node: &ParseNode) {
    listener.enter_every_rule(node);
    enter_rule(listener, node);

    for child in node.children() {
        match child {
            ParseTree::Node(nested) => walk(listener, nested),
            ParseTree::Token(token) => listener.visit_token(token),
        }
    }

    exit_rule(listener, node);
    listener.exit_every_rule(node);
}

fn enter_rule(listener: &mut dyn PatternListener, node: &ParseNode) {
    match node.kind() {
        RuleKind::Pattern => listener.enter_pattern(node),
        RuleKind::HeadingSlash => listener.enter_heading_slash(node),
        RuleKind::Text => listener.enter_text(node),
        RuleKind::MatchAll => listener.enter_match_all(node),
        RuleKind::MatchMultiple => listener.enter_match_multiple(node),
        RuleKind::MatchOne => listener.enter_match_one(node),
        RuleKind::SimpleEscape => listener.enter_simple_escape(node),
        RuleKind::EscapedAsterisk => listener.enter_escaped_asterisk(node),
        RuleKind::EscapedQuestionMark => listener.enter_escaped_question_mark(node),
        RuleKind::EscapedCharClassStart => listener.enter_escaped_char_class_start(node),
        RuleKind::CharClass => listener.enter_char_class(node),
        RuleKind::CharClassBody => listener.enter_char_class_body(node),
        RuleKind::EscapedCharClassEnd => listener.enter_escaped_char_class_end(node),
    }
}

fn exit_rule(listener: &mut dyn PatternListener, node: &ParseNode) {
    match node.kind() {
        RuleKind::Pattern => listener.exit_pattern(node),
        RuleKind::HeadingSlash => listener.exit_heading_slash(node),
        RuleKind::Text => listener.exit_text(node),
        RuleKind::MatchAll => listener.exit_match_all(node),
        RuleKind::MatchMultiple => listener.exit_match_multiple(node),
        RuleKind::MatchOne => listener.exit_match_one(node),
        RuleKind::SimpleEscape => listener.exit_simple_escape(node),
        RuleKind::EscapedAsterisk => listener.exit_escaped_asterisk(node),
        RuleKind::EscapedQuestionMark => listener.exit_escaped_question_mark(node),
        RuleKind::EscapedCharClassStart => listener.exit_escaped_char_class_start(node),
        RuleKind::CharClass => listener.exit_char_class(node),
        RuleKind::CharClassBody => listener.exit_char_class_body(node),
        RuleKind::EscapedCharClassEnd => listener.exit_escaped_char_class_end(node),
    }
}
