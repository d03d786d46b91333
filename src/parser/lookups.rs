use std::collections::HashMap;

use crate::{ast::ast::Ast, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Ast, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Modifiers are dispatched on the keyword that follows them
    parser.stmt(TokenKind::Const, parse_modified_decl_stmt);
    parser.stmt(TokenKind::Static, parse_modified_decl_stmt);
    parser.stmt(TokenKind::Ref, parse_modified_decl_stmt);
    parser.stmt(TokenKind::Private, parse_modified_decl_stmt);
    parser.stmt(TokenKind::Public, parse_modified_decl_stmt);

    // Declarations
    parser.stmt(TokenKind::Def, parse_var_decl_stmt);
    parser.stmt(TokenKind::Fn, parse_method_decl_stmt);
    parser.stmt(TokenKind::Class, parse_class_decl_stmt);
    parser.stmt(TokenKind::Lib, parse_lib_decl_stmt);
    parser.stmt(TokenKind::Use, parse_use_decl_stmt);
    parser.stmt(TokenKind::Import, parse_import_decl_stmt);

    // Directives
    parser.stmt(TokenKind::Include, parse_include_directive_stmt);
    parser.stmt(TokenKind::Macro, parse_unsupported_directive_stmt);
    parser.stmt(TokenKind::EndMacro, parse_unsupported_directive_stmt);
    parser.stmt(TokenKind::Define, parse_unsupported_directive_stmt);
    parser.stmt(TokenKind::Undefine, parse_unsupported_directive_stmt);
    parser.stmt(TokenKind::IfDefined, parse_unsupported_directive_stmt);
    parser.stmt(TokenKind::IfNotDefined, parse_unsupported_directive_stmt);
    parser.stmt(TokenKind::EndIf, parse_unsupported_directive_stmt);

    // Control flow
    parser.stmt(TokenKind::If, parse_conditional_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Break, parse_break_stmt);
    parser.stmt(TokenKind::Continue, parse_continue_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
