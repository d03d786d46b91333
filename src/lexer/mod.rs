//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization through an ordered list of sub-lexers, first match wins
//! - Recognition of keywords, directives, identifiers, literals and operators
//! - Line/column tracking for every token, trivia included
//! - Filtering of whitespace and comments from the public output

pub mod chars;
pub mod lexer;
pub mod tokens;
