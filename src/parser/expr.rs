use tracing::trace;

use crate::{
    ast::{ast::Ast, kinds::NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Operation, Token, TokenKind},
};

use super::{
    closure::resolve_closures,
    cursor::TokenCursor,
    scope::{find_paren_scope, find_scope, find_separated_scope},
};

/// Resolves and parses a complete value expression.
pub fn parse_value(tokens: &[Token]) -> Result<Ast, Error> {
    let resolved = resolve_closures(TokenCursor::new(tokens))?;
    trace!(
        resolved = %resolved.iter().map(|t| t.literal.as_str()).collect::<Vec<_>>().join(" "),
        "parsing value"
    );

    let mut cursor = TokenCursor::new(&resolved);
    parse_expression(&mut cursor)
}

/// Parses a fully parenthesized expression spanning the whole cursor range.
pub fn parse_expression(cursor: &mut TokenCursor) -> Result<Ast, Error> {
    if cursor.at_end() {
        return Err(Error::new(ErrorImpl::EmptyExpression, cursor.location()));
    }

    let left = parse_unary(cursor)?;
    if cursor.at_end() {
        return Ok(left);
    }

    let operator = cursor.get();
    if operator.operation() != Operation::Binary {
        return Err(Error::new(
            ErrorImpl::TrailingTokens {
                token: operator.describe().to_string(),
            },
            operator.position(),
        ));
    }
    cursor.advance();

    if cursor.at_end() {
        return Err(Error::new(
            ErrorImpl::MissingOperand {
                token: operator.describe().to_string(),
            },
            operator.position(),
        ));
    }

    let right = parse_expression(cursor)?;
    Ok(Ast::new(operator.node_kind(), operator.literal.clone())
        .with(left)
        .with(right))
}

/// An operand followed by any postfix applications.
fn parse_unary(cursor: &mut TokenCursor) -> Result<Ast, Error> {
    let operand = parse_operand(cursor)?;
    parse_postfix(cursor, operand)
}

fn parse_operand(cursor: &mut TokenCursor) -> Result<Ast, Error> {
    let token = cursor.get();

    if token.is(TokenKind::OpenParen) {
        // Groups produce no node of their own.
        let scope = find_paren_scope(cursor)?;
        let mut inner = cursor.sub(scope.contained_begin(), scope.contained_end());
        let node = parse_expression(&mut inner)?;
        cursor.jump(scope.end);
        return Ok(node);
    }

    if token.kind.is_singular_prefix_operator() {
        cursor.advance();
        if cursor.at_end() {
            return Err(Error::new(
                ErrorImpl::MissingOperand {
                    token: token.describe().to_string(),
                },
                token.position(),
            ));
        }
        let operand = parse_unary(cursor)?;
        return Ok(Ast::new(token.node_kind(), token.literal.clone()).with(operand));
    }

    if token.kind.is_singular_operand() {
        cursor.advance();
        return Ok(Ast::leaf(token));
    }

    Err(Error::new(
        ErrorImpl::InvalidPrimaryToken {
            token: token.describe().to_string(),
        },
        token.position(),
    ))
}

fn parse_postfix(cursor: &mut TokenCursor, mut operand: Ast) -> Result<Ast, Error> {
    loop {
        let token = cursor.get();

        operand = match token.kind {
            TokenKind::OpenParen => {
                let arguments = parse_arguments(cursor, TokenKind::OpenParen, TokenKind::CloseParen)?;
                Ast::new(NodeKind::FunctionCall, "()").with(operand).with(arguments)
            }
            TokenKind::OpenBracket => {
                let arguments =
                    parse_arguments(cursor, TokenKind::OpenBracket, TokenKind::CloseBracket)?;
                Ast::new(NodeKind::IndexOperator, "[]").with(operand).with(arguments)
            }
            TokenKind::OpenBrace => {
                let arguments = parse_arguments(cursor, TokenKind::OpenBrace, TokenKind::CloseBrace)?;
                Ast::new(NodeKind::ListingOperator, "{}").with(operand).with(arguments)
            }
            TokenKind::Increment | TokenKind::Decrement => {
                cursor.advance();
                Ast::new(token.node_kind(), token.literal.clone()).with(operand)
            }
            _ => return Ok(operand),
        };
    }
}

/// Parses a delimited, comma separated argument list under the cursor. Each
/// argument is an independent expression and goes through resolution on its
/// own.
pub fn parse_arguments(
    cursor: &mut TokenCursor,
    open: TokenKind,
    close: TokenKind,
) -> Result<Ast, Error> {
    let outer = find_scope(open, close, cursor)?;
    let scopes = find_separated_scope(open, close, TokenKind::Comma, cursor)?;
    let mut arguments = Ast::new(NodeKind::Arguments, "");

    for scope in scopes {
        if scope.is_empty() {
            let separator = cursor.at(scope.end - 1);
            return Err(Error::new(ErrorImpl::EmptyExpression, separator.position())
                .with_context("parsing argument list"));
        }

        let tokens = &cursor.tokens()[scope.contained_begin()..scope.contained_end()];
        let argument = parse_value(tokens).map_err(|e| e.with_context("parsing argument"))?;
        arguments.push_back(argument);
    }

    cursor.jump(outer.end);
    Ok(arguments)
}
