//! Type expressions and method signatures.
//!
//! A type is any value expression (`int`, `array[int]`, `std::str`) written
//! before an `@`. It is parsed with the regular expression machinery and
//! wrapped in a `Type` node.

use crate::{
    ast::{ast::Ast, kinds::NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    cursor::TokenCursor,
    expr::parse_value,
    parser::Parser,
    scope::{find_open_statement, find_paren_scope, find_separated_scope},
};

/// Parses `type-expr @` at the parser position, consuming the `@`.
pub fn parse_type(parser: &mut Parser) -> Result<Ast, Error> {
    let scope = find_open_statement(&parser.cursor(), &[TokenKind::CommercialAt])?;
    let tokens = parser.slice(scope.begin, scope.end - 1);
    let type_node = parse_type_tokens(tokens, parser.current_token())?;

    parser.jump(scope.end);
    Ok(type_node)
}

fn parse_type_tokens(tokens: &[Token], at: &Token) -> Result<Ast, Error> {
    if tokens.is_empty() {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("a type"),
                found: at.describe().to_string(),
            },
            at.position(),
        ));
    }

    let expr = parse_value(tokens).map_err(|e| e.with_context("parsing type"))?;
    Ok(Ast::new(NodeKind::Type, "").with(expr))
}

/// Parses `( parameters ) > return-type?` up to, not including, the `;` or
/// `:` that follows.
pub fn parse_method_signature(parser: &mut Parser) -> Result<Ast, Error> {
    let cursor = parser.cursor();
    let outer = find_paren_scope(&cursor)?;
    let scopes = find_separated_scope(
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Comma,
        &cursor,
    )?;

    let mut parameters = Ast::new(NodeKind::MethodParameters, "");
    for scope in scopes {
        let tokens = parser.slice(scope.contained_begin(), scope.contained_end());
        if tokens.is_empty() {
            let separator = cursor.at(scope.end - 1);
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("a parameter"),
                    found: separator.describe().to_string(),
                },
                separator.position(),
            ));
        }
        parameters.push_back(parse_parameter(tokens)?);
    }

    parser.jump(outer.end);
    parser.expect(TokenKind::GreaterThan)?;

    let mut signature = Ast::new(NodeKind::MethodSignature, "").with(parameters);

    let rest = find_open_statement(
        &parser.cursor(),
        &[TokenKind::Semicolon, TokenKind::Colon],
    )?;
    if rest.len() > 1 {
        let tokens = parser.slice(rest.begin, rest.end - 1);
        let return_type =
            parse_value(tokens).map_err(|e| e.with_context("parsing return type"))?;
        signature.push_back(Ast::new(NodeKind::MethodReturnType, "").with(return_type));
        parser.jump(rest.end - 1);
    }

    Ok(signature)
}

/// Parses `type-expr @ name (: default)?` spanning all of `tokens`.
pub fn parse_parameter(tokens: &[Token]) -> Result<Ast, Error> {
    let cursor = TokenCursor::new(tokens);
    let at = find_open_statement(&cursor, &[TokenKind::CommercialAt])?;
    let type_node = parse_type_tokens(&tokens[..at.end - 1], cursor.at(at.end - 1))?;

    let mut rest = cursor;
    rest.jump(at.end);

    let location = rest.location();
    let name = rest.advance();
    if !name.is(TokenKind::Identifier) {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("a parameter name"),
                found: name.describe().to_string(),
            },
            location,
        ));
    }

    let mut parameter = Ast::new(NodeKind::MethodParameter, "")
        .with(type_node)
        .with(Ast::leaf(name));

    if rest.is(TokenKind::Colon) {
        let colon = rest.advance();
        if rest.at_end() {
            return Err(Error::new(ErrorImpl::EmptyExpression, colon.position())
                .with_context("parsing default argument"));
        }
        let default = parse_value(rest.remaining())
            .map_err(|e| e.with_context("parsing default argument"))?;
        parameter.push_back(Ast::new(NodeKind::VariableDefinition, "").with(default));
    } else if !rest.at_end() {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("`:` or `,`"),
                found: rest.get().describe().to_string(),
            },
            rest.location(),
        ));
    }

    Ok(parameter)
}
