//! Unit tests for the parser module.
//!
//! Covers the scope finder, closure resolution, expression trees and the
//! statement grammar, including error reporting.

use crate::{
    ast::{ast::Ast, kinds::NodeKind},
    errors::errors::ErrorImpl,
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    closure::{resolve_closures, ClosureBuffer},
    cursor::TokenCursor,
    expr::parse_value,
    parser::parse,
    scope::{
        find_brace_scope, find_bracket_scope, find_open_statement, find_paren_scope,
        find_separated_scope, Scope,
    },
};

fn tokens(source: &str) -> Vec<Token> {
    tokenize(source).unwrap()
}

fn resolved(source: &str) -> String {
    let tokens = tokens(source);
    resolve_closures(TokenCursor::new(&tokens))
        .unwrap()
        .iter()
        .map(|token| token.literal.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn value(source: &str) -> Ast {
    parse_value(&tokens(source)).unwrap()
}

fn program(source: &str) -> Ast {
    parse(tokens(source)).unwrap()
}

fn leaf(kind: NodeKind, literal: &str) -> Ast {
    Ast::new(kind, literal)
}

fn num(literal: &str) -> Ast {
    leaf(NodeKind::NumberLiteral, literal)
}

fn ident(literal: &str) -> Ast {
    leaf(NodeKind::Identifier, literal)
}

fn binary(kind: NodeKind, literal: &str, left: Ast, right: Ast) -> Ast {
    Ast::new(kind, literal).with(left).with(right)
}

fn node(kind: NodeKind) -> Ast {
    Ast::new(kind, "")
}

// Scope finder

#[test]
fn test_find_scope_nested() {
    let tokens = tokens("(a [b] {c (d)}) e");
    let scope = find_paren_scope(&TokenCursor::new(&tokens)).unwrap();

    assert_eq!(scope, Scope::new(0, 12));
    assert_eq!(scope.contained_begin(), 1);
    assert_eq!(scope.contained_end(), 11);
    assert!(!scope.is_empty());
}

#[test]
fn test_find_bracket_and_brace_scopes() {
    let tokens = tokens("[a, {b}] c");
    let cursor = TokenCursor::new(&tokens);

    assert_eq!(find_bracket_scope(&cursor).unwrap(), Scope::new(0, 7));
    assert!(find_brace_scope(&cursor).unwrap_err().is_logic_error());

    let mut inner = cursor;
    inner.jump(3);
    assert_eq!(find_brace_scope(&inner).unwrap(), Scope::new(3, 6));
}

#[test]
fn test_find_scope_empty() {
    let tokens = tokens("() x");
    let scope = find_paren_scope(&TokenCursor::new(&tokens)).unwrap();

    assert_eq!(scope, Scope::new(0, 2));
    assert!(scope.is_empty());
}

#[test]
fn test_find_scope_unclosed_reports_opening() {
    let tokens = tokens("(()");
    let err = find_paren_scope(&TokenCursor::new(&tokens)).unwrap_err();

    assert!(matches!(err.get_internal(), ErrorImpl::UnclosedScope { .. }));
    assert_eq!(*err.get_position(), Position::new(1, 1));
}

#[test]
fn test_find_scope_unclosed_on_later_line() {
    let tokens = tokens("x\n  (a, (b)\n");
    let mut cursor = TokenCursor::new(&tokens);
    cursor.jump(1);
    let err = find_paren_scope(&cursor).unwrap_err();

    assert_eq!(*err.get_position(), Position::new(2, 3));
}

#[test]
fn test_find_scope_mismatched() {
    let tokens = tokens("(a]");
    let err = find_paren_scope(&TokenCursor::new(&tokens)).unwrap_err();

    match err.get_internal() {
        ErrorImpl::MismatchedDelimiter {
            expected,
            found,
            open,
        } => {
            assert_eq!(expected, ")");
            assert_eq!(found, "]");
            assert_eq!(*open, Position::new(1, 1));
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(*err.get_position(), Position::new(1, 3));
}

#[test]
fn test_find_scope_requires_opener() {
    let tokens = tokens("a)");
    let err = find_paren_scope(&TokenCursor::new(&tokens)).unwrap_err();

    assert!(err.is_logic_error());
}

#[test]
fn test_find_separated_scope() {
    let tokens = tokens("(a, (b, c), d)");
    let scopes = find_separated_scope(
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Comma,
        &TokenCursor::new(&tokens),
    )
    .unwrap();

    assert_eq!(
        scopes,
        vec![Scope::new(0, 3), Scope::new(2, 9), Scope::new(8, 11)]
    );
    assert_eq!(tokens[scopes[1].contained_begin()].literal, "(");
    assert_eq!(tokens[scopes[2].contained_begin()].literal, "d");
}

#[test]
fn test_find_separated_scope_empty_list() {
    let tokens = tokens("[]");
    let scopes = find_separated_scope(
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::Comma,
        &TokenCursor::new(&tokens),
    )
    .unwrap();

    assert!(scopes.is_empty());
}

#[test]
fn test_find_open_statement_skips_nested_terminators() {
    let tokens = tokens("foo(a; b) + 1; next");
    let scope =
        find_open_statement(&TokenCursor::new(&tokens), &[TokenKind::Semicolon]).unwrap();

    assert_eq!(scope, Scope::new(0, 9));
}

#[test]
fn test_find_open_statement_without_terminator() {
    let tokens = tokens("a + b");
    let err =
        find_open_statement(&TokenCursor::new(&tokens), &[TokenKind::Semicolon]).unwrap_err();

    assert!(matches!(err.get_internal(), ErrorImpl::UnexpectedToken { .. }));
}

// Cursor and buffer

#[test]
fn test_cursor_reads_past_range_as_eof() {
    let tokens = tokens("a b c");
    let mut cursor = TokenCursor::with_range(&tokens, 1, 2);

    assert_eq!((cursor.begin(), cursor.end()), (1, 2));
    assert_eq!(cursor.get().literal, "b");
    assert!(cursor.at(0).is(TokenKind::Eof));
    assert!(cursor.peek(1).is(TokenKind::Eof));

    cursor.advance();
    assert!(cursor.at_end());
    assert!(cursor.advance().is(TokenKind::Eof));
    assert_eq!(cursor.position(), 2);
}

#[test]
fn test_cursor_relative_advance_is_clamped() {
    let tokens = tokens("a b c d");
    let mut cursor = TokenCursor::with_range(&tokens, 1, 4);

    cursor.advance_by(2);
    assert_eq!(cursor.get().literal, "d");

    cursor.advance_by(-1);
    assert_eq!(cursor.get().literal, "c");

    cursor.advance_by(-10);
    assert_eq!(cursor.position(), 1);

    cursor.advance_by(10);
    assert_eq!(cursor.position(), 4);
    assert!(cursor.at_end());
}

#[test]
fn test_closure_buffer_insertions() {
    let tokens = tokens("a b");
    let mut buffer = ClosureBuffer::new();
    assert!(buffer.is_empty());

    let a = buffer.push_token(tokens[0].clone());
    let b = buffer.push_token(tokens[1].clone());
    buffer.insert_before(a, Token::synthetic(TokenKind::OpenParen, "(", Position::null()));
    buffer.insert_after(a, Token::synthetic(TokenKind::Comma, ",", Position::null()));
    buffer.insert_after(b, Token::synthetic(TokenKind::CloseParen, ")", Position::null()));

    let literals: Vec<String> = buffer
        .stream_to_vec()
        .into_iter()
        .map(|token| token.literal)
        .collect();
    assert_eq!(literals, vec!["(", "a", ",", "b", ")"]);
    assert!(buffer.pending().is_empty());
}

// Closure resolution

#[test]
fn test_resolve_precedence() {
    assert_eq!(resolved("1+2"), "( 1 + 2 )");
    assert_eq!(resolved("1 + 2 * 3"), "( 1 + ( 2 * 3 ) )");
    assert_eq!(resolved("1 * 2 + 3"), "( ( 1 * 2 ) + 3 )");
    assert_eq!(resolved("1 + 2 - 3"), "( ( 1 + 2 ) - 3 )");
    assert_eq!(resolved("(1+2)*3"), "( ( 1 + 2 ) * 3 )");
}

#[test]
fn test_resolve_associativity() {
    assert_eq!(resolved("a.b.c.d"), "( ( ( a . b ) . c ) . d )");
    assert_eq!(resolved("a=b=c"), "( a = ( b = c ) )");
    assert_eq!(resolved("a = b += c"), "( a = ( b += c ) )");
}

#[test]
fn test_resolve_prefix_and_postfix() {
    assert_eq!(resolved("-a.b"), "( - ( a . b ) )");
    assert_eq!(resolved("a().b"), "( a ( ) . b )");
    assert_eq!(resolved("!!x"), "( ! ! x )");
    assert_eq!(resolved("a++ + b"), "( ( a ++ ) + b )");
    assert_eq!(resolved("a * b(1 + 2)"), "( a * ( b ( 1 + 2 ) ) )");
    assert_eq!(resolved("-1 - -1"), "( -1 - -1 )");
}

#[test]
fn test_resolve_collapses_redundant_groups() {
    assert_eq!(resolved("x"), "x");
    assert_eq!(resolved("(x)"), "( x )");
    assert_eq!(resolved("((x))"), "( x )");
    assert_eq!(resolved("((1 + 2))"), "( 1 + 2 )");
}

#[test]
fn test_resolve_is_idempotent() {
    let sources = [
        "1 + 2 * 3 - 4 / 5",
        "a = b = c + d",
        "-a.b.c(1, 2)[3]",
        "!x && y || ~z",
        "foo(1 + 2, bar(3))[0] << 2",
        "(a + b) * (c - d)",
        "a . b ++ ++ . c",
        "x = y++ + -z . w [1] ++",
        "!a++ = b--",
        "x",
    ];

    for source in sources {
        let tokens = tokens(source);
        let once = resolve_closures(TokenCursor::new(&tokens)).unwrap();
        let twice = resolve_closures(TokenCursor::new(&once)).unwrap();

        let once: Vec<&str> = once.iter().map(|t| t.literal.as_str()).collect();
        let twice: Vec<&str> = twice.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(once, twice, "resolving {:?} twice changed it", source);
    }
}

#[test]
fn test_resolve_errors() {
    let cases: [(&str, fn(&ErrorImpl) -> bool); 6] = [
        ("1 +", |e| matches!(e, ErrorImpl::MissingOperand { .. })),
        ("+ 1", |e| matches!(e, ErrorImpl::OperatorFollowingOperator { .. })),
        ("a b", |e| matches!(e, ErrorImpl::OperandFollowingOperand { .. })),
        ("a !b", |e| matches!(e, ErrorImpl::PrefixFollowingOperand { .. })),
        (";", |e| matches!(e, ErrorImpl::InvalidPrimaryToken { .. })),
        ("()", |e| matches!(e, ErrorImpl::EmptyExpression)),
    ];

    for (source, expected) in cases {
        let tokens = tokens(source);
        let err = resolve_closures(TokenCursor::new(&tokens)).unwrap_err();
        assert!(
            expected(err.get_internal()),
            "{:?} gave {:?}",
            source,
            err.get_internal()
        );
    }
}

#[test]
fn test_resolve_unclosed_subexpression() {
    let tokens = tokens("(()");
    let err = resolve_closures(TokenCursor::new(&tokens)).unwrap_err();

    assert!(matches!(err.get_internal(), ErrorImpl::UnclosedScope { .. }));
    assert_eq!(*err.get_position(), Position::new(1, 1));
}

// Expressions

#[test]
fn test_expression_battery() {
    let cases = vec![
        (
            "1 + 2",
            binary(NodeKind::Addition, "+", num("1"), num("2")),
        ),
        (
            "1 + 2 * 3",
            binary(
                NodeKind::Addition,
                "+",
                num("1"),
                binary(NodeKind::Multiplication, "*", num("2"), num("3")),
            ),
        ),
        (
            "1 + 2 - 3",
            binary(
                NodeKind::Subtraction,
                "-",
                binary(NodeKind::Addition, "+", num("1"), num("2")),
                num("3"),
            ),
        ),
        (
            "a.b.c.d",
            binary(
                NodeKind::Period,
                ".",
                binary(
                    NodeKind::Period,
                    ".",
                    binary(NodeKind::Period, ".", ident("a"), ident("b")),
                    ident("c"),
                ),
                ident("d"),
            ),
        ),
        (
            "a=b=c",
            binary(
                NodeKind::SimpleAssignment,
                "=",
                ident("a"),
                binary(NodeKind::SimpleAssignment, "=", ident("b"), ident("c")),
            ),
        ),
        (
            "(1+2)*3",
            binary(
                NodeKind::Multiplication,
                "*",
                binary(NodeKind::Addition, "+", num("1"), num("2")),
                num("3"),
            ),
        ),
        (
            "foo(1, 2, 3)",
            Ast::new(NodeKind::FunctionCall, "()")
                .with(ident("foo"))
                .with(
                    node(NodeKind::Arguments)
                        .with(num("1"))
                        .with(num("2"))
                        .with(num("3")),
                ),
        ),
        (
            "-1 - -1",
            binary(NodeKind::Subtraction, "-", num("-1"), num("-1")),
        ),
    ];

    for (source, expected) in cases {
        assert_eq!(value(source), expected, "parsing {:?}", source);
    }
}

#[test]
fn test_prefix_expressions() {
    assert_eq!(
        value("!a && b"),
        binary(
            NodeKind::LogicalAnd,
            "&&",
            Ast::new(NodeKind::LogicalNot, "!").with(ident("a")),
            ident("b"),
        )
    );
    assert_eq!(
        value("-x * 2"),
        binary(
            NodeKind::Multiplication,
            "*",
            Ast::new(NodeKind::Negation, "-").with(ident("x")),
            num("2"),
        )
    );
    assert_eq!(
        value("-a.b"),
        Ast::new(NodeKind::Negation, "-").with(binary(
            NodeKind::Period,
            ".",
            ident("a"),
            ident("b")
        ))
    );
    assert_eq!(value("-2.5"), leaf(NodeKind::DoubleLiteral, "-2.5"));
}

#[test]
fn test_postfix_expressions() {
    assert_eq!(
        value("a.b()"),
        Ast::new(NodeKind::FunctionCall, "()")
            .with(binary(NodeKind::Period, ".", ident("a"), ident("b")))
            .with(node(NodeKind::Arguments))
    );
    assert_eq!(
        value("a[1]{2}"),
        Ast::new(NodeKind::ListingOperator, "{}")
            .with(
                Ast::new(NodeKind::IndexOperator, "[]")
                    .with(ident("a"))
                    .with(node(NodeKind::Arguments).with(num("1")))
            )
            .with(node(NodeKind::Arguments).with(num("2")))
    );
    assert_eq!(
        value("i++"),
        Ast::new(NodeKind::Increment, "++").with(ident("i"))
    );
}

#[test]
fn test_arguments_are_parsed_independently() {
    assert_eq!(
        value("f(1 + 2, g(x)[0])"),
        Ast::new(NodeKind::FunctionCall, "()")
            .with(ident("f"))
            .with(
                node(NodeKind::Arguments)
                    .with(binary(NodeKind::Addition, "+", num("1"), num("2")))
                    .with(
                        Ast::new(NodeKind::IndexOperator, "[]")
                            .with(
                                Ast::new(NodeKind::FunctionCall, "()")
                                    .with(ident("g"))
                                    .with(node(NodeKind::Arguments).with(ident("x")))
                            )
                            .with(node(NodeKind::Arguments).with(num("0")))
                    )
            )
    );
}

#[test]
fn test_empty_argument_is_an_error() {
    let err = parse_value(&tokens("f(1,,2)")).unwrap_err();

    assert!(matches!(err.get_internal(), ErrorImpl::EmptyExpression));
    assert_eq!(err.get_context(), &["parsing argument list".to_string()]);
}

#[test]
fn test_no_parenthesis_leakage() {
    let tree = value("a = b + c * -d . e << 2 || !f && g++");
    let mut leaked = vec![];

    tree.walk(|node, _| {
        if ["(", ")", "[", "]", "{", "}"].contains(&node.literal()) {
            leaked.push(node.literal().to_string());
        }
    });

    assert!(leaked.is_empty(), "found {:?}", leaked);
    assert_eq!(tree.kind(), NodeKind::SimpleAssignment);
}

// Statements

#[test]
fn test_parse_variable_declaration() {
    let tree = program("const def str@Foo: 42;");

    assert_eq!(
        tree,
        node(NodeKind::Program).with(
            node(NodeKind::VariableDeclaration)
                .with(node(NodeKind::Modifiers).with(leaf(NodeKind::Const, "const")))
                .with(node(NodeKind::Type).with(leaf(NodeKind::Str, "str")))
                .with(ident("Foo"))
                .with(node(NodeKind::VariableDefinition).with(num("42")))
        )
    );
}

#[test]
fn test_parse_declaration_without_definition() {
    let tree = program("static ref def array[int]@values;");
    let declaration = tree.child(0).unwrap();

    assert_eq!(declaration.children().len(), 3);
    assert_eq!(declaration.child(0).unwrap().children().len(), 2);
    assert_eq!(
        declaration.child(1).unwrap().child(0).unwrap().kind(),
        NodeKind::IndexOperator
    );
    assert_eq!(declaration.child(2).unwrap().literal(), "values");
}

#[test]
fn test_parse_method_declaration() {
    let tree = program("fn@add(int@a, int@b: 1) > int: { return a + b; };");
    let method = tree.child(0).unwrap();

    assert_eq!(
        *method,
        node(NodeKind::MethodDeclaration)
            .with(node(NodeKind::Modifiers))
            .with(ident("add"))
            .with(
                node(NodeKind::MethodSignature)
                    .with(
                        node(NodeKind::MethodParameters)
                            .with(
                                node(NodeKind::MethodParameter)
                                    .with(node(NodeKind::Type).with(leaf(NodeKind::Int, "int")))
                                    .with(ident("a"))
                            )
                            .with(
                                node(NodeKind::MethodParameter)
                                    .with(node(NodeKind::Type).with(leaf(NodeKind::Int, "int")))
                                    .with(ident("b"))
                                    .with(node(NodeKind::VariableDefinition).with(num("1")))
                            )
                    )
                    .with(node(NodeKind::MethodReturnType).with(leaf(NodeKind::Int, "int")))
            )
            .with(
                node(NodeKind::MethodDefinition).with(
                    node(NodeKind::ReturnStatement).with(binary(
                        NodeKind::Addition,
                        "+",
                        ident("a"),
                        ident("b")
                    ))
                )
            )
    );
}

#[test]
fn test_parse_method_forms() {
    let tree = program("fn@forward;\nfn@main: {};\nfn@noop() >;");

    assert_eq!(tree.children().len(), 3);
    assert_eq!(tree.child(0).unwrap().children().len(), 2);
    assert_eq!(
        tree.child(1).unwrap().child(2).unwrap().kind(),
        NodeKind::MethodDefinition
    );

    let signature = tree.child(2).unwrap().child(2).unwrap();
    assert_eq!(signature.kind(), NodeKind::MethodSignature);
    assert_eq!(signature.children().len(), 1);
    assert!(signature.child(0).unwrap().is_leaf());
}

#[test]
fn test_parse_class_declaration() {
    let source = "public class@Point: {\n  def int@x: 0;\n  fn@len() > int: { return x; };\n};";
    let tree = program(source);
    let class = tree.child(0).unwrap();

    assert_eq!(class.kind(), NodeKind::ClassDeclaration);
    assert_eq!(class.child(0).unwrap().child(0).unwrap().kind(), NodeKind::Public);
    assert_eq!(class.child(1).unwrap().literal(), "Point");

    let definition = class.child(2).unwrap();
    assert_eq!(definition.kind(), NodeKind::ClassDefinition);
    assert_eq!(definition.child(0).unwrap().kind(), NodeKind::VariableDeclaration);
    assert_eq!(definition.child(1).unwrap().kind(), NodeKind::MethodDeclaration);
}

#[test]
fn test_parse_library_declaration() {
    let tree = program("lib@math: { fn@sqrt(real@x) > real; };\nlib@empty;");

    assert_eq!(tree.child(0).unwrap().kind(), NodeKind::LibraryDeclaration);
    assert_eq!(
        tree.child(0).unwrap().child(2).unwrap().kind(),
        NodeKind::LibraryDefinition
    );
    assert_eq!(tree.child(1).unwrap().children().len(), 2);
}

#[test]
fn test_parse_conditional_chain() {
    let source = "fn@main: {\n  if (a < b) { a = b; } elif (a == b) { break; } else { continue; };\n};";
    let tree = program(source);
    let conditional = tree.path_to(|n| n.kind() == NodeKind::ConditionalStatement).unwrap();
    let conditional = *conditional.last().unwrap();

    assert_eq!(
        *conditional,
        node(NodeKind::ConditionalStatement)
            .with(
                node(NodeKind::IfStatement)
                    .with(node(NodeKind::Condition).with(binary(
                        NodeKind::LessThan,
                        "<",
                        ident("a"),
                        ident("b")
                    )))
                    .with(node(NodeKind::Block).with(node(NodeKind::ExpressionStatement).with(
                        binary(NodeKind::SimpleAssignment, "=", ident("a"), ident("b"))
                    )))
            )
            .with(
                node(NodeKind::ElifStatement)
                    .with(node(NodeKind::Condition).with(binary(
                        NodeKind::Equal,
                        "==",
                        ident("a"),
                        ident("b")
                    )))
                    .with(node(NodeKind::Block).with(node(NodeKind::BreakStatement)))
            )
            .with(
                node(NodeKind::ElseStatement)
                    .with(node(NodeKind::Block).with(node(NodeKind::ContinueStatement)))
            )
    );
}

#[test]
fn test_parse_loops() {
    let source = "fn@main: {\n  while (i < 10) { i++; };\n  for (def int@j: 0; j < 10; j += 1) { total += j; };\n};";
    let tree = program(source);
    let body = tree.child(0).unwrap().child(2).unwrap();

    let while_loop = body.child(0).unwrap();
    assert_eq!(while_loop.kind(), NodeKind::WhileStatement);
    assert_eq!(while_loop.child(0).unwrap().kind(), NodeKind::Condition);
    assert_eq!(while_loop.child(1).unwrap().kind(), NodeKind::Block);

    let for_loop = body.child(1).unwrap();
    let kinds: Vec<NodeKind> = for_loop.iter().map(|child| child.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::ForInit,
            NodeKind::Condition,
            NodeKind::ForIncrement,
            NodeKind::Block
        ]
    );
    assert_eq!(
        for_loop.child(0).unwrap().child(0).unwrap().kind(),
        NodeKind::VariableDeclaration
    );
    assert_eq!(
        *for_loop.child(2).unwrap().child(0).unwrap(),
        binary(NodeKind::AdditionAssignment, "+=", ident("j"), num("1"))
    );
}

#[test]
fn test_parse_use_and_import() {
    let source = "use @Text: str;\nuse @M: lib math;\nuse lib std::io;\nuse namespace std;\nimport io;\n#include \"core.lk\";";
    let tree = program(source);

    assert_eq!(
        tree,
        node(NodeKind::Program)
            .with(
                node(NodeKind::TypeAlias)
                    .with(ident("Text"))
                    .with(node(NodeKind::Type).with(leaf(NodeKind::Str, "str")))
            )
            .with(
                node(NodeKind::LibraryAlias)
                    .with(ident("M"))
                    .with(ident("math"))
            )
            .with(node(NodeKind::LibraryInclusion).with(binary(
                NodeKind::DoubleColon,
                "::",
                ident("std"),
                ident("io")
            )))
            .with(node(NodeKind::NamespaceInclusion).with(ident("std")))
            .with(node(NodeKind::ImportDeclaration).with(ident("io")))
            .with(
                node(NodeKind::IncludeDirective)
                    .with(leaf(NodeKind::StringLiteral, "\"core.lk\""))
            )
    );
}

#[test]
fn test_top_level_rejects_statements() {
    let err = parse(tokens("1 + 2;")).unwrap_err();
    assert!(matches!(err.get_internal(), ErrorImpl::InvalidStatement { .. }));

    let err = parse(tokens("return 1;")).unwrap_err();
    assert!(matches!(err.get_internal(), ErrorImpl::InvalidStatement { .. }));
}

#[test]
fn test_class_body_rejects_statements() {
    let err = parse(tokens("class@A: { x = 1; };")).unwrap_err();

    assert!(matches!(err.get_internal(), ErrorImpl::InvalidStatement { .. }));
    assert_eq!(err.get_context(), &["parsing class declaration".to_string()]);
}

#[test]
fn test_modifiers_need_declaration() {
    let err = parse(tokens("const import x;")).unwrap_err();

    match err.get_internal() {
        ErrorImpl::InvalidStatement { token, .. } => assert_eq!(token, "import"),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_unsupported_directive() {
    let err = parse(tokens("#macro")).unwrap_err();

    assert_eq!(
        err.get_internal(),
        &ErrorImpl::UnsupportedDirective {
            directive: "#macro".to_string()
        }
    );
}

#[test]
fn test_missing_semicolon_has_context() {
    let err = parse(tokens("def int@x: 1")).unwrap_err();

    assert!(matches!(err.get_internal(), ErrorImpl::UnexpectedToken { .. }));
    assert_eq!(
        err.get_context(),
        &["parsing variable declaration".to_string()]
    );
}

#[test]
fn test_nested_error_context_chain() {
    let err = parse(tokens("fn@main: { while (x) { def int@y: ; }; };")).unwrap_err();

    assert!(matches!(err.get_internal(), ErrorImpl::EmptyExpression));
    assert_eq!(
        err.get_context(),
        &[
            "parsing variable declaration".to_string(),
            "parsing while statement".to_string(),
            "parsing method declaration".to_string(),
        ]
    );
}

#[test]
fn test_empty_expression_positions() {
    // Each empty expression is reported at the delimiter that closes it off.
    let cases = [
        ("def int@x:\n ;", Position::new(2, 2)),
        ("fn@m: {\n if () { }; };", Position::new(2, 5)),
        ("fn@m: { while ( ) {}; };", Position::new(1, 15)),
        ("fn@m: { for (def int@i: 0; ; i++) {}; };", Position::new(1, 28)),
        ("fn@m: { for (def int@i: 0; i; ) {}; };", Position::new(1, 31)),
        ("fn@m(int@n:) >;", Position::new(1, 11)),
    ];

    for (source, position) in cases {
        let err = parse(tokens(source)).unwrap_err();

        assert!(
            matches!(err.get_internal(), ErrorImpl::EmptyExpression),
            "{:?} failed with {:?}",
            source,
            err
        );
        assert_eq!(*err.get_position(), position, "{:?}", source);
    }
}

#[test]
fn test_empty_condition_is_rendered() {
    let source = "fn@m: {\n    while () {};\n};";
    let err = parse(tokens(source)).unwrap_err();
    let rendered = crate::render_error(&err, source, "loop.lk");

    assert!(err.get_context().contains(&"parsing condition".to_string()));
    assert!(rendered.contains("2 | while () {};"));
}

#[test]
fn test_unclosed_body() {
    let err = parse(tokens("fn@main: {\n  return 1;\n")).unwrap_err();

    assert!(matches!(err.get_internal(), ErrorImpl::UnclosedScope { .. }));
    assert_eq!(*err.get_position(), Position::new(1, 10));
}
