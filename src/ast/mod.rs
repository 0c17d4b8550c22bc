/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Expressions, operators and call targets
/// - statements: Statements, including the binary `Chain` sequencing node
/// - program: Function declarations and the assembled program
pub mod expressions;
pub mod program;
pub mod statements;
