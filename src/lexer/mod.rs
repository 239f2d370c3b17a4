//! Lexical analysis module for the front end.
//!
//! This module turns source text into tokens, layered leaves first:
//!
//! - `scanner` - character cursor with span and line/column bookkeeping
//! - `lexer` - hand-written scanner for identifiers, literals and operators
//! - `tagging` - reclassifies registered identifiers as `Tag` tokens
//! - `stream` - ring-buffered token lookahead used by the parser
//!
//! Lexical errors are never raised: they come back as error-kind tokens.

pub mod lexer;
pub mod scanner;
pub mod stream;
pub mod tagging;
pub mod tokens;
