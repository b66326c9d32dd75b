//! Parser module for glob patterns
//!
//! This module contains the parse tree definitions, the recursive descent parser and
//! the listener protocol used to walk the resulting tree.
//!
//! Grammar, in order of precedence where alternatives overlap:
//!
//! ```text
//! Pattern               := HeadingSlash? Segment* EOF
//! HeadingSlash          := SLASH
//! Segment               := MatchAll | MatchMultiple | MatchOne | CharClass
//!                        | EscapedAsterisk | EscapedQuestionMark
//!                        | EscapedCharClassStart | SimpleEscape | Text
//! MatchAll              := ASTERISK ASTERISK
//! MatchMultiple         := ASTERISK
//! MatchOne              := QUESTION_MARK
//! EscapedAsterisk       := ESCAPE ASTERISK
//! EscapedQuestionMark   := ESCAPE QUESTION_MARK
//! EscapedCharClassStart := ESCAPE CHAR_CLASS_START
//! SimpleEscape          := ESCAPE
//! Text                  := (ANY | SLASH | CHAR_CLASS_END)+
//! CharClass             := CHAR_CLASS_START CharClassBody CHAR_CLASS_END
//! CharClassBody         := CHAR_CLASS_END? (EscapedCharClassEnd | <any token but `]`>)*
//! EscapedCharClassEnd   := ESCAPE CHAR_CLASS_END
//! ```
//!
//! A slash only has a rule of its own in heading position; anywhere else it is plain
//! text, as is a `]` outside a class.

pub mod ast;
pub mod error;
pub mod listener;
#[allow(clippy::module_inception)]
pub mod parser;

pub use ast::{ParseNode, ParseTree, RuleKind};
pub use error::ParseError;
pub use listener::{walk, PatternListener};
pub use parser::PatternParser;

/// Main parser function that takes a pattern and returns its parse tree
pub fn parse(source: &str) -> Result<ParseNode, ParseError> {
    PatternParser::new(source).pattern()
}
