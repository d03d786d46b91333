use std::{fmt::Display, slice::Iter};

use crate::lexer::tokens::Token;

use super::kinds::NodeKind;

/// A node of the syntax tree.
///
/// Nodes own their children exclusively. There is no parent pointer: code
/// that needs the enclosing nodes walks the tree with [`Ast::walk`], which
/// hands every node its ancestor stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    kind: NodeKind,
    literal: String,
    children: Vec<Ast>,
}

impl Ast {
    pub fn new(kind: NodeKind, literal: impl Into<String>) -> Self {
        Ast {
            kind,
            literal: literal.into(),
            children: Vec::new(),
        }
    }

    /// Creates a childless node from an operand or keyword token.
    pub fn leaf(token: &Token) -> Self {
        Ast::new(token.node_kind(), token.literal.clone())
    }

    /// Builder form of [`Ast::push_back`].
    pub fn with(mut self, child: Ast) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_back(&mut self, child: Ast) {
        self.children.push(child);
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn children(&self) -> &[Ast] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Ast> {
        self.children.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Ast> {
        self.children.iter()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First direct child of the given kind.
    pub fn find_child(&self, kind: NodeKind) -> Option<&Ast> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// Visits every node depth-first, parents before children. The visitor
    /// receives the node and its ancestors, outermost first.
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Ast, &[&'a Ast]),
    {
        let mut ancestors = Vec::new();
        walk_node(self, &mut visit, &mut ancestors);
    }

    /// The chain of nodes from `self` down to the first node matching the
    /// predicate, both ends included.
    pub fn path_to<P>(&self, predicate: P) -> Option<Vec<&Ast>>
    where
        P: Fn(&Ast) -> bool,
    {
        let mut found = None;
        self.walk(|node, ancestors| {
            if found.is_none() && predicate(node) {
                let mut path = ancestors.to_vec();
                path.push(node);
                found = Some(path);
            }
        });
        found
    }

    /// Number of nodes of the given kind in the subtree, `self` included.
    pub fn count(&self, kind: NodeKind) -> usize {
        let mut total = 0;
        self.walk(|node, _| {
            if node.kind == kind {
                total += 1;
            }
        });
        total
    }

    /// Renders the subtree one node per line, children indented.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.walk(|node, ancestors| {
            out.push_str(&"  ".repeat(ancestors.len()));
            if node.literal.is_empty() {
                out.push_str(&format!("{}\n", node.kind));
            } else {
                out.push_str(&format!("{} {:?}\n", node.kind, node.literal));
            }
        });
        out
    }
}

fn walk_node<'a, F>(node: &'a Ast, visit: &mut F, ancestors: &mut Vec<&'a Ast>)
where
    F: FnMut(&'a Ast, &[&'a Ast]),
{
    visit(node, ancestors);
    ancestors.push(node);
    for child in &node.children {
        walk_node(child, visit, ancestors);
    }
    ancestors.pop();
}

impl Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.children.is_empty() {
            return write!(f, "{}({:?})", self.kind, self.literal);
        }

        write!(f, "{}(", self.kind)?;
        for (index, child) in self.children.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, ")")
    }
}
