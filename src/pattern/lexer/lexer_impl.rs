//! Implementation of the pattern lexer
//!
//! Classification is handled entirely by logos. This module wraps it with the
//! pull-style `next_token` contract the parser relies on: owned tokens with byte
//! offsets, and an `EOF` token that repeats once the input is exhausted.

use crate::pattern::lexer::tokens::{Token, TokenKind};
use logos::Logos;

/// Pull lexer over a single pattern
pub struct PatternLexer<'source> {
    inner: logos::Lexer<'source, TokenKind>,
    source: &'source str,
}

impl<'source> PatternLexer<'source> {
    pub fn new(source: &'source str) -> Self {
        PatternLexer {
            inner: TokenKind::lexer(source),
            source,
        }
    }

    pub fn source(&self) -> &'source str {
        self.source
    }

    /// Produce the next token, or `EOF` at `source.len()` once exhausted
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(result) => {
                // The catch-all makes errors unreachable on valid UTF-8, but a
                // rejected character is still ordinary content.
                let kind = result.unwrap_or(TokenKind::Any);
                let token = Token::new(kind, self.inner.slice(), self.inner.span().start);
                log::trace!("token {:?} {:?} at {}", token.kind, token.text, token.start);
                token
            }
            None => Token::eof(self.source.len()),
        }
    }
}

impl Iterator for PatternLexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Tokenize a whole pattern. The trailing `EOF` is not included.
pub fn tokenize(source: &str) -> Vec<Token> {
    PatternLexer::new(source).collect()
}

/// Rebuild the source text from a token sequence
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text.as_str()).collect()
}
