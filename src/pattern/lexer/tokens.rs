//! Token definitions for glob patterns
//!
//! The lexer is a single-character classifier: every character of the input becomes
//! exactly one token. Composite constructs (`**`, `\*`, character classes) are
//! recognised by the parser, never here.
use logos::Logos;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// All token kinds a pattern can be split into
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    #[token("/")]
    Slash,
    #[token("\\")]
    Escape,
    #[token("*")]
    Asterisk,
    #[token("?")]
    QuestionMark,
    #[token("[")]
    CharClassStart,
    #[token("]")]
    CharClassEnd,

    // Catch-all: one character with no special meaning
    #[regex(r"[^/\\*?\[\]]")]
    Any,

    // Never produced by logos, synthesised by the lexer at end of input
    Eof,
}

impl TokenKind {
    /// Short lowercase name used by the token and tag formats
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Slash => "slash",
            TokenKind::Escape => "escape",
            TokenKind::Asterisk => "asterisk",
            TokenKind::QuestionMark => "question-mark",
            TokenKind::CharClassStart => "char-class-start",
            TokenKind::CharClassEnd => "char-class-end",
            TokenKind::Any => "any",
            TokenKind::Eof => "eof",
        }
    }

    /// Check if this token kind carries a wildcard or escape meaning at top level.
    /// Every other kind except `Eof` is plain text there.
    pub fn is_special(&self) -> bool {
        matches!(
            self,
            TokenKind::Escape
                | TokenKind::Asterisk
                | TokenKind::QuestionMark
                | TokenKind::CharClassStart
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token: its kind, the exact source text and its byte offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            start,
        }
    }

    /// The zero-length end-of-input token at `offset`
    pub fn eof(offset: usize) -> Self {
        Token::new(TokenKind::Eof, String::new(), offset)
    }

    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Any => write!(f, "<any:{}>", self.text),
            kind => write!(f, "<{}>", kind),
        }
    }
}
