//! # pathglob
//!
//! A lexer and parser for path glob patterns: `*`, `**`, `?`, bracketed character
//! classes, backslash escapes and a heading `/`.
//!
//! The [lexer](pattern::lexer) turns a pattern into single-character tokens, the
//! [parser](pattern::parser) builds a lossless parse tree from them, and a
//! [listener](pattern::parser::listener) walks that tree. Matching itself is left to
//! consumers of the tree.
//!
//! ```ignore
//! use pathglob::pattern::parser::parse;
//!
//! let tree = parse("/src/**/*.rs")?;
//! println!("{}", pathglob::pattern::formats::to_treeviz_str(&tree));
//! ```

pub mod pattern;

pub use pattern::lexer::{tokenize, PatternLexer, Token, TokenKind};
pub use pattern::parser::{parse, ParseError, ParseNode, ParseTree, PatternListener, RuleKind};
