//! Error types and error handling for the front end.
//!
//! Lexical problems are reported as error-kind tokens by the lexer. This
//! module covers the other tier: fatal syntax errors raised by the token
//! stream and the parser. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each way a parse can fail
//! - Error naming and suggestion tips for display

pub mod errors;
