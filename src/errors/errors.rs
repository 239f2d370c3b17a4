use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A fatal syntax error. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedAnnotation { .. } => "ExpectedAnnotation",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::UnrecognisedCodeElement { .. } => "UnrecognisedCodeElement",
            ErrorImpl::MisplacedAuxiliaryTag { .. } => "MisplacedAuxiliaryTag",
            ErrorImpl::LexicalError { .. } => "LexicalError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected_kind,
                expected_text: Some(expected_text),
                actual_kind,
                actual_text,
            } => ErrorTip::Suggestion(format!(
                "expected `{}` ({}), found `{}` ({})",
                expected_text, expected_kind, actual_text, actual_kind
            )),
            ErrorImpl::UnexpectedToken {
                expected_kind,
                expected_text: None,
                actual_kind,
                actual_text,
            } => ErrorTip::Suggestion(format!(
                "expected {}, found `{}` ({})",
                expected_kind, actual_text, actual_kind
            )),
            ErrorImpl::ExpectedAnnotation { actual_text, .. } => ErrorTip::Suggestion(format!(
                "`:` must be followed by an annotation name or documentation, found `{}`",
                actual_text
            )),
            ErrorImpl::ExpectedExpression { token } => {
                ErrorTip::Suggestion(format!("`{}` cannot start an expression", token))
            }
            ErrorImpl::UnrecognisedCodeElement { token } => ErrorTip::Suggestion(format!(
                "`{}` does not start a declaration or statement",
                token
            )),
            ErrorImpl::MisplacedAuxiliaryTag { tag, owner } => ErrorTip::Suggestion(format!(
                "`{}` may only appear inside `{}`",
                tag, owner
            )),
            ErrorImpl::LexicalError { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token: expected {expected_kind} {expected_text:?}, found {actual_kind} {actual_text:?}")]
    UnexpectedToken {
        expected_kind: TokenKind,
        expected_text: Option<String>,
        actual_kind: TokenKind,
        actual_text: String,
    },
    #[error("expected annotation after `:`, found {actual_kind} {actual_text:?}")]
    ExpectedAnnotation {
        actual_kind: TokenKind,
        actual_text: String,
    },
    #[error("expected expression, found {token:?}")]
    ExpectedExpression { token: String },
    #[error("unrecognised code element: {token:?}")]
    UnrecognisedCodeElement { token: String },
    #[error("auxiliary tag {tag:?} outside of {owner:?}")]
    MisplacedAuxiliaryTag { tag: String, owner: String },
    #[error("lexical error {kind}: {text:?}")]
    LexicalError { kind: TokenKind, text: String },
}
