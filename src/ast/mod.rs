/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Nodes are built bottom-up by value and never change afterwards.
///
/// Submodules:
/// - ast: Core node traits, annotations, paths and the compilation unit
/// - declarations: Module, function, value and type declarations
/// - expressions: Literals, operators, calls and member access
/// - statements: Control flow and other statements
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod statements;
