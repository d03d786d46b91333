//! Unit tests for the syntax tree node.

use super::{ast::Ast, kinds::NodeKind};

fn sample() -> Ast {
    // a + b * 2
    Ast::new(NodeKind::Addition, "+")
        .with(Ast::new(NodeKind::Identifier, "a"))
        .with(
            Ast::new(NodeKind::Multiplication, "*")
                .with(Ast::new(NodeKind::Identifier, "b"))
                .with(Ast::new(NodeKind::NumberLiteral, "2")),
        )
}

#[test]
fn test_push_back_appends_in_order() {
    let mut node = Ast::new(NodeKind::Arguments, "");
    node.push_back(Ast::new(NodeKind::NumberLiteral, "1"));
    node.push_back(Ast::new(NodeKind::NumberLiteral, "2"));

    assert_eq!(node.children().len(), 2);
    assert_eq!(node.child(0).unwrap().literal(), "1");
    assert_eq!(node.child(1).unwrap().literal(), "2");
    assert!(node.child(2).is_none());
    assert!(!node.is_leaf());
}

#[test]
fn test_walk_visits_parents_before_children() {
    let tree = sample();
    let mut visited = Vec::new();
    tree.walk(|node, ancestors| visited.push((node.literal().to_string(), ancestors.len())));

    assert_eq!(
        visited,
        vec![
            ("+".to_string(), 0),
            ("a".to_string(), 1),
            ("*".to_string(), 1),
            ("b".to_string(), 2),
            ("2".to_string(), 2),
        ]
    );
}

#[test]
fn test_path_to_returns_ancestor_chain() {
    let tree = sample();
    let path = tree
        .path_to(|node| node.kind() == NodeKind::NumberLiteral)
        .unwrap();

    let kinds: Vec<NodeKind> = path.iter().map(|node| node.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Addition,
            NodeKind::Multiplication,
            NodeKind::NumberLiteral
        ]
    );
    assert!(tree.path_to(|node| node.kind() == NodeKind::Period).is_none());
}

#[test]
fn test_count_and_find_child() {
    let tree = sample();

    assert_eq!(tree.count(NodeKind::Identifier), 2);
    assert_eq!(tree.count(NodeKind::Period), 0);
    assert_eq!(
        tree.find_child(NodeKind::Multiplication).unwrap().literal(),
        "*"
    );
}

#[test]
fn test_display_and_pretty() {
    let tree = sample();

    assert_eq!(
        tree.to_string(),
        "Addition(Identifier(\"a\"), Multiplication(Identifier(\"b\"), NumberLiteral(\"2\")))"
    );
    assert_eq!(
        tree.pretty(),
        "Addition \"+\"\n  Identifier \"a\"\n  Multiplication \"*\"\n    Identifier \"b\"\n    NumberLiteral \"2\"\n"
    );
}

#[test]
fn test_declaration_kinds() {
    assert!(NodeKind::IncludeDirective.is_declaration());
    assert!(!NodeKind::Identifier.is_declaration());
    assert!(NodeKind::VariableDeclaration.is_declaration());
    assert!(!NodeKind::WhileStatement.is_declaration());
}
