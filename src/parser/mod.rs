//! Parser module for building the syntax tree.
//!
//! Parsing happens in two layers:
//!
//! - Statements and declarations are parsed top down, one keyword-driven
//!   handler per statement form (see `lookups`).
//! - Value expressions are first rewritten by the closure resolver into a
//!   fully parenthesized token stream, then parsed by plain recursive
//!   descent. Precedence and associativity live entirely in the resolver.
//!
//! The scope finder matches `()`, `[]` and `{}` pairs for both layers.

pub mod closure;
pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod scope;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
