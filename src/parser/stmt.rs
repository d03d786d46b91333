use tracing::debug;

use crate::{
    ast::{ast::Ast, kinds::NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::parse_value,
    parser::Parser,
    scope::{find_brace_scope, find_open_statement, find_paren_scope},
    types::{parse_method_signature, parse_type},
};

/// Which statements a body accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementContext {
    /// Top level, class and library bodies: declarations, `use`, `import`
    /// and directives only.
    Declarations,
    /// Method and control flow bodies: anything.
    Procedural,
}

pub fn parse_stmt(parser: &mut Parser, context: StatementContext) -> Result<Ast, Error> {
    let kind = parser.current_token_kind();

    if context == StatementContext::Declarations
        && !(kind.is_modifier_keyword() || kind.is_declarative_keyword() || kind.is_directive())
    {
        return Err(invalid_statement(
            parser,
            "only declarations, `use`, `import` and directives are allowed here",
        ));
    }

    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        debug!(%kind, position = %parser.get_position(), "dispatching statement");
        return handler(parser);
    }

    if kind.is_primary_opening() {
        debug!(position = %parser.get_position(), "dispatching expression statement");
        return parse_expression_stmt(parser);
    }

    Err(invalid_statement(
        parser,
        "expected a declaration, a statement or an expression",
    ))
}

fn invalid_statement(parser: &Parser, message: &str) -> Error {
    Error::new(
        ErrorImpl::InvalidStatement {
            token: parser.current_token().describe().to_string(),
            message: message.to_string(),
        },
        parser.get_position(),
    )
}

/// An empty value expression, reported at the delimiter that closes it
/// off.
fn empty_expression(at: &Token) -> Error {
    Error::new(ErrorImpl::EmptyExpression, at.position())
}

/// Parses the value expression from the parser position up to the first
/// top-level terminator, leaving the parser on the terminator.
fn parse_value_until(parser: &mut Parser, terminators: &[TokenKind]) -> Result<Ast, Error> {
    let scope = find_open_statement(&parser.cursor(), terminators)?;
    if scope.len() == 1 {
        return Err(empty_expression(parser.current_token()));
    }
    let value = parse_value(parser.slice(scope.begin, scope.end - 1))?;
    parser.jump(scope.end - 1);
    Ok(value)
}

/// Parses a brace delimited body of statements.
fn parse_body(parser: &mut Parser, context: StatementContext) -> Result<Vec<Ast>, Error> {
    let scope = find_brace_scope(&parser.cursor())?;
    let saved = parser.enter_scope(scope);

    let mut statements = Vec::new();
    while parser.has_tokens() {
        statements.push(parse_stmt(parser, context)?);
    }

    parser.exit_scope(saved, scope);
    Ok(statements)
}

fn parse_block(parser: &mut Parser) -> Result<Ast, Error> {
    let mut block = Ast::new(NodeKind::Block, "");
    for statement in parse_body(parser, StatementContext::Procedural)? {
        block.push_back(statement);
    }
    Ok(block)
}

/// Parses a parenthesized condition.
fn parse_condition(parser: &mut Parser) -> Result<Ast, Error> {
    let scope = find_paren_scope(&parser.cursor())?;
    if scope.is_empty() {
        return Err(empty_expression(parser.current_token()).with_context("parsing condition"));
    }
    let value = parse_value(parser.slice(scope.contained_begin(), scope.contained_end()))
        .map_err(|e| e.with_context("parsing condition"))?;
    parser.jump(scope.end);
    Ok(Ast::new(NodeKind::Condition, "").with(value))
}

fn parse_modifiers(parser: &mut Parser) -> Ast {
    let mut modifiers = Ast::new(NodeKind::Modifiers, "");
    while parser.current_token_kind().is_modifier_keyword() {
        let token = parser.advance();
        modifiers.push_back(Ast::leaf(&token));
    }
    modifiers
}

/// Dispatches a declaration that starts with modifiers on the keyword that
/// follows them.
pub fn parse_modified_decl_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    let mut offset = 0;
    while parser.peek_kind(offset).is_modifier_keyword() {
        offset += 1;
    }

    match parser.peek_kind(offset) {
        TokenKind::Def => parse_var_decl_stmt(parser),
        TokenKind::Fn => parse_method_decl_stmt(parser),
        TokenKind::Class => parse_class_decl_stmt(parser),
        TokenKind::Lib => parse_lib_decl_stmt(parser),
        _ => {
            for _ in 0..offset {
                parser.advance();
            }
            Err(invalid_statement(
                parser,
                "modifiers must be followed by `def`, `fn`, `class` or `lib`",
            ))
        }
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parse_var_decl(parser).map_err(|e| e.with_context("parsing variable declaration"))
}

fn parse_var_decl(parser: &mut Parser) -> Result<Ast, Error> {
    let modifiers = parse_modifiers(parser);
    parser.expect(TokenKind::Def)?;

    let type_node = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?;

    let mut declaration = Ast::new(NodeKind::VariableDeclaration, "")
        .with(modifiers)
        .with(type_node)
        .with(Ast::leaf(&name));

    match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
        }
        TokenKind::Colon => {
            parser.advance();
            let value = parse_value_until(parser, &[TokenKind::Semicolon])?;
            declaration.push_back(Ast::new(NodeKind::VariableDefinition, "").with(value));
            parser.expect(TokenKind::Semicolon)?;
        }
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("`;` or `:`"),
                    found: parser.current_token().describe().to_string(),
                },
                parser.get_position(),
            ))
        }
    }

    Ok(declaration)
}

pub fn parse_method_decl_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parse_method_decl(parser).map_err(|e| e.with_context("parsing method declaration"))
}

fn parse_method_decl(parser: &mut Parser) -> Result<Ast, Error> {
    let modifiers = parse_modifiers(parser);
    parser.expect(TokenKind::Fn)?;
    parser.expect(TokenKind::CommercialAt)?;
    let name = parser.expect(TokenKind::Identifier)?;

    let mut declaration = Ast::new(NodeKind::MethodDeclaration, "")
        .with(modifiers)
        .with(Ast::leaf(&name));

    if parser.current_token_kind() == TokenKind::OpenParen {
        declaration.push_back(parse_method_signature(parser)?);
    }

    match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
        }
        TokenKind::Colon => {
            parser.advance();
            let mut definition = Ast::new(NodeKind::MethodDefinition, "");
            for statement in parse_body(parser, StatementContext::Procedural)? {
                definition.push_back(statement);
            }
            declaration.push_back(definition);
            parser.expect(TokenKind::Semicolon)?;
        }
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("`(`, `;` or `:`"),
                    found: parser.current_token().describe().to_string(),
                },
                parser.get_position(),
            ))
        }
    }

    Ok(declaration)
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parse_type_decl(
        parser,
        TokenKind::Class,
        NodeKind::ClassDeclaration,
        NodeKind::ClassDefinition,
    )
    .map_err(|e| e.with_context("parsing class declaration"))
}

pub fn parse_lib_decl_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parse_type_decl(
        parser,
        TokenKind::Lib,
        NodeKind::LibraryDeclaration,
        NodeKind::LibraryDefinition,
    )
    .map_err(|e| e.with_context("parsing library declaration"))
}

/// Classes and libraries share one grammar and differ only in node kinds.
fn parse_type_decl(
    parser: &mut Parser,
    keyword: TokenKind,
    declaration_kind: NodeKind,
    definition_kind: NodeKind,
) -> Result<Ast, Error> {
    let modifiers = parse_modifiers(parser);
    parser.expect(keyword)?;
    parser.expect(TokenKind::CommercialAt)?;
    let name = parser.expect(TokenKind::Identifier)?;

    let mut declaration = Ast::new(declaration_kind, "")
        .with(modifiers)
        .with(Ast::leaf(&name));

    if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        let mut definition = Ast::new(definition_kind, "");
        for member in parse_body(parser, StatementContext::Declarations)? {
            definition.push_back(member);
        }
        declaration.push_back(definition);
    }

    parser.expect(TokenKind::Semicolon)?;
    Ok(declaration)
}

pub fn parse_use_decl_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parse_use_decl(parser).map_err(|e| e.with_context("parsing use declaration"))
}

fn parse_use_decl(parser: &mut Parser) -> Result<Ast, Error> {
    parser.expect(TokenKind::Use)?;

    let declaration = match parser.current_token_kind() {
        TokenKind::CommercialAt => {
            parser.advance();
            let name = parser.expect(TokenKind::Identifier)?;
            parser.expect(TokenKind::Colon)?;

            if parser.current_token_kind() == TokenKind::Lib {
                parser.advance();
                let library = parse_value_until(parser, &[TokenKind::Semicolon])?;
                Ast::new(NodeKind::LibraryAlias, "")
                    .with(Ast::leaf(&name))
                    .with(library)
            } else {
                let aliased = parse_value_until(parser, &[TokenKind::Semicolon])?;
                Ast::new(NodeKind::TypeAlias, "")
                    .with(Ast::leaf(&name))
                    .with(Ast::new(NodeKind::Type, "").with(aliased))
            }
        }
        TokenKind::Lib => {
            parser.advance();
            let library = parse_value_until(parser, &[TokenKind::Semicolon])?;
            Ast::new(NodeKind::LibraryInclusion, "").with(library)
        }
        TokenKind::Namespace => {
            parser.advance();
            let namespace = parse_value_until(parser, &[TokenKind::Semicolon])?;
            Ast::new(NodeKind::NamespaceInclusion, "").with(namespace)
        }
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from("`@`, `lib` or `namespace`"),
                    found: parser.current_token().describe().to_string(),
                },
                parser.get_position(),
            ))
        }
    };

    parser.expect(TokenKind::Semicolon)?;
    Ok(declaration)
}

pub fn parse_import_decl_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parser.expect(TokenKind::Import)?;
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Ast::new(NodeKind::ImportDeclaration, "").with(Ast::leaf(&name)))
}

pub fn parse_include_directive_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parser.expect(TokenKind::Include)?;
    let path = parser.expect(TokenKind::StringLiteral)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Ast::new(NodeKind::IncludeDirective, "").with(Ast::leaf(&path)))
}

pub fn parse_unsupported_directive_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    let directive = parser.current_token().describe().to_string();
    Err(Error::new(
        ErrorImpl::UnsupportedDirective { directive },
        parser.get_position(),
    ))
}

pub fn parse_conditional_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parse_conditional(parser).map_err(|e| e.with_context("parsing if statement"))
}

fn parse_conditional(parser: &mut Parser) -> Result<Ast, Error> {
    parser.expect(TokenKind::If)?;
    let condition = parse_condition(parser)?;
    let block = parse_block(parser)?;

    let mut conditional = Ast::new(NodeKind::ConditionalStatement, "").with(
        Ast::new(NodeKind::IfStatement, "")
            .with(condition)
            .with(block),
    );

    while parser.current_token_kind() == TokenKind::Elif {
        parser.advance();
        let condition = parse_condition(parser)?;
        let block = parse_block(parser)?;
        conditional.push_back(
            Ast::new(NodeKind::ElifStatement, "")
                .with(condition)
                .with(block),
        );
    }

    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        let block = parse_block(parser)?;
        conditional.push_back(Ast::new(NodeKind::ElseStatement, "").with(block));
    }

    parser.expect(TokenKind::Semicolon)?;
    Ok(conditional)
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parse_while(parser).map_err(|e| e.with_context("parsing while statement"))
}

fn parse_while(parser: &mut Parser) -> Result<Ast, Error> {
    parser.expect(TokenKind::While)?;
    let condition = parse_condition(parser)?;
    let block = parse_block(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Ast::new(NodeKind::WhileStatement, "")
        .with(condition)
        .with(block))
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parse_for(parser).map_err(|e| e.with_context("parsing for statement"))
}

fn parse_for(parser: &mut Parser) -> Result<Ast, Error> {
    parser.expect(TokenKind::For)?;

    let header = find_paren_scope(&parser.cursor())?;
    let header_close = parser.cursor().at(header.end - 1).clone();
    let saved = parser.enter_scope(header);

    let init = parse_var_decl(parser)?;
    let condition = parse_value_until(parser, &[TokenKind::Semicolon])
        .map_err(|e| e.with_context("parsing loop condition"))?;
    parser.expect(TokenKind::Semicolon)?;

    let increment = {
        let cursor = parser.cursor();
        if cursor.at_end() {
            return Err(empty_expression(&header_close).with_context("parsing loop increment"));
        }
        parse_value(cursor.remaining()).map_err(|e| e.with_context("parsing loop increment"))?
    };
    parser.exit_scope(saved, header);

    let block = parse_block(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Ast::new(NodeKind::ForStatement, "")
        .with(Ast::new(NodeKind::ForInit, "").with(init))
        .with(Ast::new(NodeKind::Condition, "").with(condition))
        .with(Ast::new(NodeKind::ForIncrement, "").with(increment))
        .with(block))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parser.expect(TokenKind::Return)?;

    let mut statement = Ast::new(NodeKind::ReturnStatement, "");
    if parser.current_token_kind() != TokenKind::Semicolon {
        let value = parse_value_until(parser, &[TokenKind::Semicolon])
            .map_err(|e| e.with_context("parsing return value"))?;
        statement.push_back(value);
    }

    parser.expect(TokenKind::Semicolon)?;
    Ok(statement)
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parser.expect(TokenKind::Break)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(Ast::new(NodeKind::BreakStatement, ""))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    parser.expect(TokenKind::Continue)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(Ast::new(NodeKind::ContinueStatement, ""))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Ast, Error> {
    let value = parse_value_until(parser, &[TokenKind::Semicolon])
        .map_err(|e| e.with_context("parsing expression statement"))?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Ast::new(NodeKind::ExpressionStatement, "").with(value))
}
