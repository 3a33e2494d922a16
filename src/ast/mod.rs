/// AST (Abstract Syntax Tree) module
///
/// Submodules:
/// - ast: the `Expr` tree and its type tags
/// - expressions: constructors and the evaluator-supplied callable marker
pub mod ast;
pub mod expressions;

#[cfg(test)]
mod tests;
