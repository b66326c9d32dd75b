//! Syntax errors reported by the pattern parser

use crate::pattern::lexer::TokenKind;
use thiserror::Error;

/// Errors that can occur while parsing a pattern
///
/// The parser stops at the first error; no partial tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required token is missing, e.g. the `]` closing a character class
    #[error("unexpected {found} at offset {offset}, expected {expected}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        offset: usize,
    },

    /// Tokens remain after a complete pattern
    #[error("trailing input: unexpected {found} at offset {offset}")]
    TrailingInput { found: TokenKind, offset: usize },
}

impl ParseError {
    /// Byte offset of the offending token
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { offset, .. } | ParseError::TrailingInput { offset, .. } => {
                *offset
            }
        }
    }

    /// Kind of the offending token
    pub fn found(&self) -> TokenKind {
        match self {
            ParseError::UnexpectedToken { found, .. } | ParseError::TrailingInput { found, .. } => {
                *found
            }
        }
    }
}
