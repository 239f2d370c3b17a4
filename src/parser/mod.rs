//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! The core parser in `parser.rs` knows no concrete construct. Each
//! declaration and statement is a plugin registered in `lookups.rs` under the
//! tag it starts with; the parser turns that tag into a dispatchable `Tag`
//! token and hands control to the plugin, which calls back for:
//!
//! - Code element names and parameter lists
//! - Leading and trailing annotations
//! - Nested sequences of code elements, stopped by `end` or an auxiliary tag
//! - Expressions
//!
//! Expressions use a Pratt parser with NUD (null denotation) and LED (left
//! denotation) functions and binding powers for precedence.

pub mod declarations;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
