/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Parameter, Function and the Contract root node
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
/// - types: Definitions for type representations in the AST
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
