//! Delimiter matching over token ranges.

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position, LOGIC_ERROR,
};

use super::cursor::TokenCursor;

/// A delimited token range. `begin` indexes the opening token and `end` is
/// one past the closing token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub begin: usize,
    pub end: usize,
}

impl Scope {
    pub fn new(begin: usize, end: usize) -> Self {
        Scope { begin, end }
    }

    /// First index inside the delimiters.
    pub fn contained_begin(&self) -> usize {
        self.begin + 1
    }

    /// One past the last index inside the delimiters.
    pub fn contained_end(&self) -> usize {
        self.end.saturating_sub(1).max(self.contained_begin())
    }

    pub fn is_empty(&self) -> bool {
        self.contained_begin() == self.contained_end()
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }
}

/// Finds the scope opened by the `open` token under the cursor.
pub fn find_scope(open: TokenKind, close: TokenKind, cursor: &TokenCursor) -> Result<Scope, Error> {
    if !cursor.is(open) {
        return Err(LOGIC_ERROR!(
            cursor.location(),
            "find_scope expected `{}` under the cursor, found `{}`",
            open.spelling(),
            cursor.get().describe()
        ));
    }

    let begin = cursor.position();
    let opened_at = cursor.location();
    let mut scan = *cursor;
    scan.advance();

    if scan.is(close) {
        return Ok(Scope::new(begin, scan.position() + 1));
    }

    // Closers still owed, innermost last, with where they were opened.
    let mut expected: Vec<(TokenKind, Position)> = vec![(close, opened_at)];

    while !scan.at_end() {
        let token = scan.get();

        if let Some(closer) = token.kind.closer() {
            expected.push((closer, token.position()));
        } else if token.kind.is_closing_scope() || token.is(close) {
            let (owed, open_position) = match expected.last() {
                Some(top) => *top,
                None => break,
            };

            if token.kind != owed {
                return Err(Error::new(
                    ErrorImpl::MismatchedDelimiter {
                        expected: owed.spelling().to_string(),
                        found: token.describe().to_string(),
                        open: open_position,
                    },
                    token.position(),
                ));
            }

            expected.pop();
            if expected.is_empty() {
                trace!(begin, end = scan.position() + 1, "found scope");
                return Ok(Scope::new(begin, scan.position() + 1));
            }
        }

        scan.advance();
    }

    Err(Error::new(
        ErrorImpl::UnclosedScope {
            open: open.spelling().to_string(),
        },
        opened_at,
    ))
}

/// Finds the scope under the cursor and splits it on top-level separators.
///
/// Each sub-scope starts at the opener or a separator and ends one past the
/// next separator or the closer, so its contained range is one element. An
/// empty scope yields no sub-scopes.
pub fn find_separated_scope(
    open: TokenKind,
    close: TokenKind,
    separator: TokenKind,
    cursor: &TokenCursor,
) -> Result<Vec<Scope>, Error> {
    let outer = find_scope(open, close, cursor)?;
    if outer.is_empty() {
        return Ok(vec![]);
    }

    let mut scopes = vec![];
    let mut start = outer.begin;
    let mut depth = 0usize;

    for index in outer.contained_begin()..outer.contained_end() {
        let kind = cursor.at(index).kind;
        if kind.is_opening_scope() {
            depth += 1;
        } else if kind.is_closing_scope() {
            depth = depth.saturating_sub(1);
        } else if kind == separator && depth == 0 {
            scopes.push(Scope::new(start, index + 1));
            start = index;
        }
    }
    scopes.push(Scope::new(start, outer.end));

    Ok(scopes)
}

/// Finds the extent of a statement starting at the cursor: up to and
/// including the first terminator outside any nested delimiters.
pub fn find_open_statement(cursor: &TokenCursor, terminators: &[TokenKind]) -> Result<Scope, Error> {
    let begin = cursor.position();
    let mut scan = *cursor;

    while !scan.at_end() {
        let token = scan.get();

        if token.is_one_of_many(terminators) {
            return Ok(Scope::new(begin, scan.position() + 1));
        }

        if let Some(closer) = token.kind.closer() {
            let nested = find_scope(token.kind, closer, &scan)?;
            scan.jump(nested.end);
            continue;
        }

        if token.kind.is_closing_scope() {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: describe_terminators(terminators),
                    found: token.describe().to_string(),
                },
                token.position(),
            ));
        }

        scan.advance();
    }

    Err(Error::new(
        ErrorImpl::UnexpectedToken {
            expected: describe_terminators(terminators),
            found: scan.get().describe().to_string(),
        },
        scan.location(),
    ))
}

fn describe_terminators(terminators: &[TokenKind]) -> String {
    terminators
        .iter()
        .map(|kind| format!("`{}`", kind.spelling()))
        .collect::<Vec<_>>()
        .join(" or ")
}

pub fn find_paren_scope(cursor: &TokenCursor) -> Result<Scope, Error> {
    find_scope(TokenKind::OpenParen, TokenKind::CloseParen, cursor)
}

pub fn find_bracket_scope(cursor: &TokenCursor) -> Result<Scope, Error> {
    find_scope(TokenKind::OpenBracket, TokenKind::CloseBracket, cursor)
}

pub fn find_brace_scope(cursor: &TokenCursor) -> Result<Scope, Error> {
    find_scope(TokenKind::OpenBrace, TokenKind::CloseBrace, cursor)
}
