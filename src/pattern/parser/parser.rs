//! Recursive descent parser for glob patterns
//!
//! The parser pulls tokens from a [`PatternLexer`] and keeps exactly one token of
//! lookahead. Each grammar rule is a method; composite rules (`**`, `\*`, classes) are
//! decided by peeking at the token after the one just consumed.
//!
//! The only decision that needs more than one token is `\]` inside a class: it is an
//! escaped terminator when another `]` follows somewhere later in the input, and the
//! class terminator otherwise. The position of the last `]` in the source is computed
//! once up front so that check stays O(1).

use crate::pattern::lexer::{PatternLexer, Token, TokenKind};
use crate::pattern::parser::ast::{ParseNode, ParseTree, RuleKind};
use crate::pattern::parser::error::ParseError;

pub struct PatternParser<'source> {
    lexer: PatternLexer<'source>,
    current: Token,
    last_class_end: Option<usize>,
}

impl<'source> PatternParser<'source> {
    pub fn new(source: &'source str) -> Self {
        Self::from_lexer(PatternLexer::new(source))
    }

    pub fn from_lexer(mut lexer: PatternLexer<'source>) -> Self {
        let last_class_end = lexer.source().rfind(']');
        let current = lexer.next_token();
        PatternParser {
            lexer,
            current,
            last_class_end,
        }
    }

    /// Parse the whole input as a `Pattern`
    pub fn pattern(mut self) -> Result<ParseNode, ParseError> {
        let mut children = Vec::new();

        if self.at(TokenKind::Slash) {
            let slash = self.bump();
            children.push(ParseNode::from_tokens(RuleKind::HeadingSlash, vec![slash]).into());
        }

        while let Some(segment) = self.segment()? {
            children.push(ParseTree::Node(segment));
        }

        if !self.at(TokenKind::Eof) {
            return Err(ParseError::TrailingInput {
                found: self.current.kind,
                offset: self.current.start,
            });
        }

        let pattern = ParseNode::new(RuleKind::Pattern, children, 0);
        log::debug!(
            "parsed pattern {:?} into {} segment(s)",
            pattern.text(),
            pattern.segments().count()
        );
        Ok(pattern)
    }

    fn peek_kind(&self) -> TokenKind {
        self.current.kind
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn bump(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind,
                found: self.current.kind,
                offset: self.current.start,
            })
        }
    }

    /// One segment, or `None` when no segment can start at the current token
    fn segment(&mut self) -> Result<Option<ParseNode>, ParseError> {
        let node = match self.peek_kind() {
            TokenKind::Asterisk => self.asterisks(),
            TokenKind::QuestionMark => {
                let question_mark = self.bump();
                ParseNode::from_tokens(RuleKind::MatchOne, vec![question_mark])
            }
            TokenKind::Escape => self.escape(),
            TokenKind::CharClassStart => self.char_class()?,
            TokenKind::Any | TokenKind::Slash | TokenKind::CharClassEnd => self.text(),
            TokenKind::Eof => return Ok(None),
        };
        Ok(Some(node))
    }

    // `**` is always a MatchAll; a third asterisk starts a new segment
    fn asterisks(&mut self) -> ParseNode {
        let first = self.bump();
        if self.at(TokenKind::Asterisk) {
            let second = self.bump();
            ParseNode::from_tokens(RuleKind::MatchAll, vec![first, second])
        } else {
            ParseNode::from_tokens(RuleKind::MatchMultiple, vec![first])
        }
    }

    fn escape(&mut self) -> ParseNode {
        let escape = self.bump();
        let kind = match self.peek_kind() {
            TokenKind::Asterisk => RuleKind::EscapedAsterisk,
            TokenKind::QuestionMark => RuleKind::EscapedQuestionMark,
            TokenKind::CharClassStart => RuleKind::EscapedCharClassStart,
            _ => return ParseNode::from_tokens(RuleKind::SimpleEscape, vec![escape]),
        };
        let escaped = self.bump();
        ParseNode::from_tokens(kind, vec![escape, escaped])
    }

    fn text(&mut self) -> ParseNode {
        let mut tokens = Vec::new();
        while !self.peek_kind().is_special() && !self.at(TokenKind::Eof) {
            tokens.push(self.bump());
        }
        ParseNode::from_tokens(RuleKind::Text, tokens)
    }

    fn char_class(&mut self) -> Result<ParseNode, ParseError> {
        let open = self.bump();
        let body_start = open.end();
        let mut body: Vec<ParseTree> = Vec::new();

        // A `]` right after `[` is content, not the terminator
        if self.at(TokenKind::CharClassEnd) {
            body.push(self.bump().into());
        }

        loop {
            match self.peek_kind() {
                TokenKind::CharClassEnd | TokenKind::Eof => break,
                TokenKind::Escape => {
                    let escape = self.bump();
                    if self.at(TokenKind::CharClassEnd) && self.class_end_follows(self.current.start)
                    {
                        let end = self.bump();
                        body.push(
                            ParseNode::from_tokens(RuleKind::EscapedCharClassEnd, vec![escape, end])
                                .into(),
                        );
                    } else {
                        body.push(escape.into());
                    }
                }
                _ => body.push(self.bump().into()),
            }
        }

        let close = self.expect(TokenKind::CharClassEnd)?;
        let body = ParseNode::new(RuleKind::CharClassBody, body, body_start);
        let class = ParseNode::new(
            RuleKind::CharClass,
            vec![open.into(), body.into(), close.into()],
            body_start,
        );
        log::debug!("parsed char class {:?} at {:?}", class.text(), class.span());
        Ok(class)
    }

    /// Whether a `]` occurs anywhere after the one at `offset`
    fn class_end_follows(&self, offset: usize) -> bool {
        self.last_class_end.is_some_and(|last| last > offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ParseNode {
        PatternParser::new(source)
            .pattern()
            .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
    }

    fn segments(source: &str) -> Vec<(RuleKind, String)> {
        parse(source)
            .child_nodes()
            .map(|node| (node.kind(), node.text().to_string()))
            .collect()
    }

    fn seg(kind: RuleKind, text: &str) -> (RuleKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn test_empty_pattern() {
        let pattern = parse("");
        assert_eq!(pattern.kind(), RuleKind::Pattern);
        assert_eq!(pattern.span(), 0..0);
        assert!(pattern.children().is_empty());
    }

    #[test]
    fn test_asterisk_runs() {
        assert_eq!(segments("*"), vec![seg(RuleKind::MatchMultiple, "*")]);
        assert_eq!(segments("**"), vec![seg(RuleKind::MatchAll, "**")]);
        assert_eq!(
            segments("***"),
            vec![seg(RuleKind::MatchAll, "**"), seg(RuleKind::MatchMultiple, "*")]
        );
        assert_eq!(
            segments("****"),
            vec![seg(RuleKind::MatchAll, "**"), seg(RuleKind::MatchAll, "**")]
        );
    }

    #[test]
    fn test_text_stops_at_special_tokens() {
        for (source, special) in [("ab*", "*"), ("ab?", "?"), ("ab\\", "\\"), ("ab[c]", "[c]")] {
            let found = segments(source);
            assert_eq!(found[0], seg(RuleKind::Text, "ab"), "source {source:?}");
            assert_eq!(found[1].1, special, "source {source:?}");
        }
        assert_eq!(segments("a/b]c"), vec![seg(RuleKind::Text, "a/b]c")]);
    }

    #[test]
    fn test_heading_slash_only_first() {
        assert_eq!(
            segments("/a"),
            vec![seg(RuleKind::HeadingSlash, "/"), seg(RuleKind::Text, "a")]
        );
        assert_eq!(segments("a/b"), vec![seg(RuleKind::Text, "a/b")]);
        assert_eq!(
            segments("//"),
            vec![seg(RuleKind::HeadingSlash, "/"), seg(RuleKind::Text, "/")]
        );
    }

    #[test]
    fn test_escapes() {
        assert_eq!(segments("\\*"), vec![seg(RuleKind::EscapedAsterisk, "\\*")]);
        assert_eq!(segments("\\?"), vec![seg(RuleKind::EscapedQuestionMark, "\\?")]);
        assert_eq!(segments("\\["), vec![seg(RuleKind::EscapedCharClassStart, "\\[")]);
        assert_eq!(segments("\\"), vec![seg(RuleKind::SimpleEscape, "\\")]);
        assert_eq!(
            segments("\\a"),
            vec![seg(RuleKind::SimpleEscape, "\\"), seg(RuleKind::Text, "a")]
        );
        assert_eq!(
            segments("\\\\*"),
            vec![seg(RuleKind::SimpleEscape, "\\"), seg(RuleKind::EscapedAsterisk, "\\*")]
        );
    }

    #[test]
    fn test_text_stops_at_wildcards() {
        assert_eq!(
            segments("ab*c?d"),
            vec![
                seg(RuleKind::Text, "ab"),
                seg(RuleKind::MatchMultiple, "*"),
                seg(RuleKind::Text, "c"),
                seg(RuleKind::MatchOne, "?"),
                seg(RuleKind::Text, "d"),
            ]
        );
    }

    #[test]
    fn test_stray_class_end_is_text() {
        assert_eq!(segments("a]b"), vec![seg(RuleKind::Text, "a]b")]);
    }

    #[test]
    fn test_char_class_structure() {
        let pattern = parse("[a\\]b]");
        let class = pattern.child_nodes().next().unwrap();
        assert_eq!(class.kind(), RuleKind::CharClass);
        assert_eq!(class.span(), 0..6);

        let body = class.child_nodes().next().unwrap();
        assert_eq!(body.kind(), RuleKind::CharClassBody);
        assert_eq!(body.text(), "a\\]b");
        let nested: Vec<RuleKind> = body.child_nodes().map(ParseNode::kind).collect();
        assert_eq!(nested, vec![RuleKind::EscapedCharClassEnd]);
    }

    #[test]
    fn test_char_class_contents_are_literal() {
        let source = "[]a/\\b**?[\\]c]";
        assert_eq!(segments(source), vec![seg(RuleKind::CharClass, source)]);
    }

    #[test]
    fn test_escaped_end_without_later_terminator_closes() {
        assert_eq!(segments("[\\]"), vec![seg(RuleKind::CharClass, "[\\]")]);
        assert_eq!(
            segments("[\\]-d"),
            vec![seg(RuleKind::CharClass, "[\\]"), seg(RuleKind::Text, "-d")]
        );
    }

    #[test]
    fn test_two_classes() {
        assert_eq!(
            segments("[a][b]"),
            vec![seg(RuleKind::CharClass, "[a]"), seg(RuleKind::CharClass, "[b]")]
        );
    }

    #[test]
    fn test_unterminated_class() {
        let error = PatternParser::new("a[bc").pattern().unwrap_err();
        assert_eq!(
            error,
            ParseError::UnexpectedToken {
                expected: TokenKind::CharClassEnd,
                found: TokenKind::Eof,
                offset: 4,
            }
        );
    }

    #[test]
    fn test_empty_brackets_are_unterminated() {
        let error = PatternParser::new("[]").pattern().unwrap_err();
        assert_eq!(error.found(), TokenKind::Eof);
        assert_eq!(error.offset(), 2);
    }

    #[test]
    fn test_print_tree_sample() {
        let source = "/a-***?-b-[]a\\]/*?a]-c-[\\]-d-\\*\\?\\[/";
        assert_eq!(
            segments(source),
            vec![
                seg(RuleKind::HeadingSlash, "/"),
                seg(RuleKind::Text, "a-"),
                seg(RuleKind::MatchAll, "**"),
                seg(RuleKind::MatchMultiple, "*"),
                seg(RuleKind::MatchOne, "?"),
                seg(RuleKind::Text, "-b-"),
                seg(RuleKind::CharClass, "[]a\\]/*?a]"),
                seg(RuleKind::Text, "-c-"),
                seg(RuleKind::CharClass, "[\\]"),
                seg(RuleKind::Text, "-d-"),
                seg(RuleKind::EscapedAsterisk, "\\*"),
                seg(RuleKind::EscapedQuestionMark, "\\?"),
                seg(RuleKind::EscapedCharClassStart, "\\["),
                seg(RuleKind::Text, "/"),
            ]
        );
    }
}
