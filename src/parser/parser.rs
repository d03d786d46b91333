//! Parser state and the entry point that builds a `Program` tree.
//!
//! Statements are dispatched through a lookup table from the leading token
//! kind to a handler, filled by [`create_token_lookups`]. Value expressions
//! inside statements are delimited with the scope finder and handed to the
//! closure resolver and expression parser.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{ast::Ast, kinds::NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, LOGIC_ERROR,
};

use super::{
    cursor::TokenCursor,
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    scope::Scope,
    stmt::{parse_stmt, StatementContext},
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// One past the last token of the body being parsed
    end: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.len();
        Parser {
            tokens,
            pos: 0,
            end,
            stmt_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        if self.pos < self.end {
            &self.tokens[self.pos]
        } else {
            Token::eof()
        }
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        if self.pos + offset < self.end {
            self.tokens[self.pos + offset].kind
        } else {
            TokenKind::Eof
        }
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos < self.end {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            return Ok(self.advance());
        }

        match error {
            Some(error) => Err(error),
            None => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: describe_expected(expected_kind),
                    found: self.current_token().describe().to_string(),
                },
                self.get_position(),
            )),
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse in the current body.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.end && self.current_token_kind() != TokenKind::Eof
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Source position of the current token, or of the last token when the
    /// body is exhausted.
    pub fn get_position(&self) -> Position {
        self.cursor().location()
    }

    /// A cursor over the current body, positioned at the current token.
    pub fn cursor(&self) -> TokenCursor<'_> {
        let mut cursor = TokenCursor::with_range(&self.tokens, 0, self.end);
        cursor.jump(self.pos);
        cursor
    }

    pub fn jump(&mut self, pos: usize) {
        self.pos = pos.min(self.end);
    }

    pub fn slice(&self, begin: usize, end: usize) -> &[Token] {
        &self.tokens[begin.min(self.end)..end.min(self.end)]
    }

    /// Restricts parsing to the inside of `scope`. Returns the previous
    /// limit, to be handed back to [`Parser::exit_scope`].
    pub fn enter_scope(&mut self, scope: Scope) -> usize {
        let saved = self.end;
        self.end = scope.contained_end();
        self.pos = scope.contained_begin();
        saved
    }

    /// Restores the limit saved by [`Parser::enter_scope`] and moves past
    /// the scope's closing delimiter.
    pub fn exit_scope(&mut self, saved_end: usize, scope: Scope) {
        self.end = saved_end;
        self.pos = scope.end.min(saved_end);
    }
}

fn describe_expected(kind: TokenKind) -> String {
    match kind {
        TokenKind::Identifier => String::from("an identifier"),
        TokenKind::StringLiteral => String::from("a string literal"),
        _ => format!("`{}`", kind.spelling()),
    }
}

/// Parses a stream of tokens into a `Program` tree.
///
/// The top level accepts declarations, `use`/`import` and directives. The
/// first error stops parsing.
pub fn parse(tokens: Vec<Token>) -> Result<Ast, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut program = Ast::new(NodeKind::Program, "");

    while parser.has_tokens() {
        let location = parser.get_position();
        let stmt = parse_stmt(&mut parser, StatementContext::Declarations)?;
        if !stmt.kind().is_declaration() {
            return Err(LOGIC_ERROR!(
                location,
                "top level produced a {:?} node",
                stmt.kind()
            ));
        }
        program.push_back(stmt);
    }

    debug!(statements = program.children().len(), "parsed top level");
    Ok(program)
}
