/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The tree node and its traversal helpers
/// - kinds: The closed set of node kinds
pub mod ast;
pub mod kinds;

#[cfg(test)]
mod tests;
