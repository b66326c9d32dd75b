//! Main module for pathglob library functionality

pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;
