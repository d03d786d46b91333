//! Error types and error handling for the front end.
//!
//! This module defines the single error type returned by every stage:
//!
//! - Error structures with source line/column information
//! - Specific error variants for lexing, scope matching and parsing
//! - Context chains added by enclosing parse functions
//! - Helpful error names and suggestions for display

pub mod errors;
