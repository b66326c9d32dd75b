//! Lexer module for glob patterns
//!
//! This module contains the tokenization logic, including token definitions and the
//! lexer implementation.
//!
//! Tokenization is context free: `*` is an asterisk whether or not it sits inside a
//! character class, and `\` is an escape token regardless of what follows it. The
//! parser decides what each token means in context, using one token of lookahead.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{detokenize, tokenize, PatternLexer};
pub use tokens::{Token, TokenKind};
