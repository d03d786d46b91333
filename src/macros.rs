//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_FIXED_LEXER!` - Creates a sub-lexer for a token with a fixed spelling
//! - `LOGIC_ERROR!` - Creates a programmer logic error tagged with its call site
//!
//! These macros reduce boilerplate in the lexer and parser implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$line` - The line after the token
/// * `$column` - The column after the token
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberLiteral, "42".to_string(), 1, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            line: $line,
            column: $column,
        }
    };
}

/// Creates a sub-lexer for a token with a single fixed spelling.
///
/// The generated function reports a lexeme of the spelling's length when the
/// remaining source starts with it, and nothing otherwise.
///
/// # Example
///
/// ```ignore
/// let semicolon: SubLexer = MK_FIXED_LEXER!(TokenKind::Semicolon, ";");
/// ```
#[macro_export]
macro_rules! MK_FIXED_LEXER {
    ($kind:expr, $value:literal) => {
        |lexer: &Lexer| -> Result<Option<Lexeme>, Error> {
            if lexer.remainder().starts_with($value) {
                Ok(Some(Lexeme {
                    kind: $kind,
                    len: $value.len(),
                }))
            } else {
                Ok(None)
            }
        }
    };
}

/// Creates a `ProgrammerLogic` error carrying the file and line of the check
/// that failed.
///
/// # Example
///
/// ```ignore
/// return Err(LOGIC_ERROR!(cursor.position(), "cursor is not at `{}`", "("));
/// ```
#[macro_export]
macro_rules! LOGIC_ERROR {
    ($position:expr, $($arg:tt)*) => {
        $crate::errors::errors::Error::new(
            $crate::errors::errors::ErrorImpl::ProgrammerLogic {
                detail: format!($($arg)*),
                file: file!(),
                line: line!(),
            },
            $position,
        )
    };
}
