//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `IMPL_CODE_ELEMENT!` - Implements the node traits for code element structs
//!
//! These macros reduce boilerplate in the lexer and the AST.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's source text
/// * `$position` - The position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::DecimalIntegerLiteral, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $position:expr) => {
        Token {
            kind: $kind,
            text: $text,
            position: $position,
        }
    };
}

/// Implements `Node` and `CodeElementNode` for structs carrying the
/// `first_token`, `leading_annotations` and `trailing_annotations` fields.
///
/// # Example
///
/// ```ignore
/// IMPL_CODE_ELEMENT!(ModuleDecl, PackageDecl);
/// ```
#[macro_export]
macro_rules! IMPL_CODE_ELEMENT {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $crate::ast::ast::Node for $node {
                fn first_token(&self) -> &$crate::lexer::tokens::Token {
                    &self.first_token
                }
            }

            impl $crate::ast::ast::CodeElementNode for $node {
                fn leading_annotations(&self) -> &[$crate::ast::ast::Annotation] {
                    &self.leading_annotations
                }
                fn trailing_annotations(&self) -> &[$crate::ast::ast::Annotation] {
                    &self.trailing_annotations
                }
            }
        )+
    };
}
